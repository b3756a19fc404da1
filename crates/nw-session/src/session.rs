//! Dice session management.
//!
//! `DiceSession` ties the settings store, roll engine and history together
//! behind a small command interface. All state lives on one thread; the
//! only suspension point is the delay between requesting a roll and drawing
//! its faces.

use std::time::Duration;

use chrono::Local;
use tracing::{debug, info};

use nw_core::{
    HistoryEntry, HistoryLog, KeyValueStore, MAX_DICE, RollBatch, RollEngine, RollSource,
    Settings, SettingsStore, StdRollSource,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::form::SettingsForm;
use crate::view::{DieFace, DieView};

/// A roll that has been requested but not yet drawn.
#[derive(Debug)]
struct PendingRoll {
    /// Settings as they were when the roll was requested.
    settings: Settings,
}

/// An interactive dice session.
pub struct DiceSession<S> {
    store: SettingsStore<S>,
    settings: Settings,
    history: HistoryLog,
    engine: RollEngine<Box<dyn RollSource>>,
    faces: [DieFace; MAX_DICE],
    pending: Option<PendingRoll>,
    roll_delay: Duration,
}

impl<S: KeyValueStore> DiceSession<S> {
    /// Start a session on `backend`, loading (and repairing) stored settings.
    pub fn new(backend: S, config: SessionConfig) -> Self {
        let source = match config.seed {
            Some(seed) => StdRollSource::seeded(seed),
            None => StdRollSource::from_os(),
        };
        Self::with_source(backend, config, source)
    }

    /// Start a session drawing faces from `source`.
    pub fn with_source(
        backend: S,
        config: SessionConfig,
        source: impl RollSource + 'static,
    ) -> Self {
        let store = SettingsStore::with_key(backend, config.settings_key);
        let settings = store.load();
        let source: Box<dyn RollSource> = Box::new(source);
        info!(
            count = settings.active_die_count(),
            "dice session started"
        );
        Self {
            store,
            settings,
            history: HistoryLog::with_limit(config.history_limit),
            engine: RollEngine::new(source),
            faces: Default::default(),
            pending: None,
            roll_delay: config.roll_delay,
        }
    }

    /// The current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The roll history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The settings store.
    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    /// Whether a roll is waiting to complete.
    pub fn is_rolling(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a roll: capture the current settings and show the active dice
    /// as rolling. Fails if a roll is already pending.
    pub fn request_roll(&mut self) -> SessionResult<()> {
        if self.pending.is_some() {
            debug!("roll requested while another is pending, ignoring");
            return Err(SessionError::RollPending);
        }
        let settings = self.settings.clone();
        for face in self.faces.iter_mut().take(settings.active_die_count()) {
            *face = DieFace::Rolling;
        }
        self.pending = Some(PendingRoll { settings });
        Ok(())
    }

    /// Finish the pending roll: draw the faces, show them and log the batch.
    pub fn complete_roll(&mut self) -> SessionResult<RollBatch> {
        let pending = self.pending.take().ok_or(SessionError::NoPendingRoll)?;
        let batch = self.engine.roll(&pending.settings);
        for result in batch.results() {
            self.faces[result.position] = DieFace::Named(result.display_name.clone());
        }
        if !batch.is_empty() {
            self.history
                .append(HistoryEntry::from_batch(Local::now(), &batch));
        }
        info!(dice = batch.len(), "rolled {batch}");
        Ok(batch)
    }

    /// Request a roll, wait out the roll delay, then complete it.
    ///
    /// Once requested the roll always completes: if the returned future is
    /// dropped during the delay, the faces are drawn and logged on drop.
    pub async fn roll(&mut self) -> SessionResult<RollBatch> {
        self.request_roll()?;
        let delay = self.roll_delay;
        let pending = CompleteOnDrop { session: self };
        tokio::time::sleep(delay).await;
        pending.session.complete_roll()
    }

    /// Empty the roll history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// A form filled with the current settings.
    pub fn edit_form(&self) -> SettingsForm {
        SettingsForm::from_settings(&self.settings)
    }

    /// Apply a submitted form and persist it.
    ///
    /// The new settings take effect even when persisting fails; the error
    /// reports that they will not survive the session.
    pub fn save_settings(&mut self, form: SettingsForm) -> SessionResult<()> {
        self.settings = form.submit();
        self.store.save(&self.settings)?;
        debug!(
            count = self.settings.active_die_count(),
            "settings saved"
        );
        Ok(())
    }

    /// All six die slots, active ones visible.
    pub fn dice(&self) -> Vec<DieView> {
        let active = self.settings.active_die_count();
        self.faces
            .iter()
            .enumerate()
            .map(|(position, face)| DieView {
                position,
                visible: position < active,
                face: face.clone(),
            })
            .collect()
    }

    /// History rendered one line per entry, most recent first.
    pub fn history_lines(&self) -> Vec<String> {
        self.history
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Process a line of user input and return a response.
    pub async fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => {
                let batch = self.roll().await?;
                Ok(format!("Rolled: {batch}"))
            }
            "count" => self.do_count(rest),
            "name" => self.do_name(rest),
            "settings" => Ok(self.describe_settings()),
            "dice" => Ok(self.describe_dice()),
            "history" => Ok(self.describe_history()),
            "clear" => {
                self.clear_history();
                Ok("History cleared.".to_string())
            }
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn do_count(&mut self, rest: &str) -> SessionResult<String> {
        let count = rest
            .parse::<usize>()
            .map_err(|_| SessionError::InvalidCount(rest.to_string()))?;
        let mut form = self.edit_form();
        form.set_num_dice(count)?;
        self.save_settings(form)?;
        Ok(format!("Active dice: {count}"))
    }

    fn do_name(&mut self, rest: &str) -> SessionResult<String> {
        let (position, name) = match rest.split_once(' ') {
            Some((position, name)) => (position, name),
            None => (rest, ""),
        };
        let index = position
            .parse::<usize>()
            .ok()
            .and_then(|p| p.checked_sub(1))
            .ok_or_else(|| SessionError::InvalidPosition(position.to_string()))?;
        let mut form = self.edit_form();
        form.set_name(index, name)?;
        self.save_settings(form)?;
        Ok(format!(
            "Face {} is now \"{}\"",
            index + 1,
            self.settings.face_names()[index]
        ))
    }

    fn describe_settings(&self) -> String {
        let mut out = format!("Active dice: {}\n", self.settings.active_die_count());
        for (i, name) in self.settings.face_names().iter().enumerate() {
            out.push_str(&format!("  Face {}: {name}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    fn describe_dice(&self) -> String {
        self.dice()
            .iter()
            .filter(|d| d.visible)
            .map(|d| format!("[{}]", d.face))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn describe_history(&self) -> String {
        if self.history.is_empty() {
            return "No rolls yet.".to_string();
        }
        format!(
            "Last {} roll(s), newest first (keeps {}):\n{}",
            self.history.len(),
            self.history.limit(),
            self.history.export_text()
        )
    }
}

/// Completes a requested roll whose waiting future was dropped.
struct CompleteOnDrop<'a, S: KeyValueStore> {
    session: &'a mut DiceSession<S>,
}

impl<S: KeyValueStore> Drop for CompleteOnDrop<'_, S> {
    fn drop(&mut self) {
        if self.session.is_rolling() {
            debug!("roll future dropped while pending, completing now");
            let _ = self.session.complete_roll();
        }
    }
}

const HELP: &str = "\
Commands:
  roll              Roll the active dice
  count <1-6>       Set how many dice are active
  name <1-6> <text> Name a face (empty text restores the default)
  settings          Show the die count and face names
  dice              Show the dice as last rolled
  history           Show recent rolls
  clear             Clear the roll history
  help              Show this help
  quit              Leave the session";
