//! Audio playback boundary.
//!
//! Playback is owned by an external media player process; this module only
//! spawns it with the lesson's audio reference, stops it on request, and
//! reports failures. Errors never propagate past this boundary into the
//! view code: the caller turns them into a user-visible fallback message
//! and the platform error goes to the log.

use std::process::{Child, Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to start player `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("player `{command}` exited with status {status}")]
    PlayerFailed { command: String, status: i32 },
}

/// What happened to the player process since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Still running (or nothing was playing)
    NoChange,
    /// Exited normally, playback finished
    Finished,
}

/// Handle to the external media player.
pub struct AudioPlayer {
    command: String,
    child: Option<Child>,
}

impl AudioPlayer {
    /// Create a player using `command`, or the platform default.
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.unwrap_or_else(|| default_player_command().to_string()),
            child: None,
        }
    }

    /// The player command in use
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether a player process is currently running
    pub fn is_active(&self) -> bool {
        self.child.is_some()
    }

    /// Start playing `audio`. Any previous player process is stopped first.
    pub fn play(&mut self, audio: &str) -> Result<(), AudioError> {
        self.stop();

        tracing::info!(player = %self.command, %audio, "starting playback");
        let child = Command::new(&self.command)
            .arg(audio)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| {
                tracing::warn!(player = %self.command, error = %source, "player spawn failed");
                AudioError::Spawn {
                    command: self.command.clone(),
                    source,
                }
            })?;

        self.child = Some(child);
        Ok(())
    }

    /// Stop the running player process, if any.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    /// Check whether the player process has exited since the last poll.
    ///
    /// A clean exit means playback finished; a non-zero status is reported
    /// as an error for the caller to surface.
    pub fn poll(&mut self) -> Result<PlayerEvent, AudioError> {
        let Some(child) = self.child.as_mut() else {
            return Ok(PlayerEvent::NoChange);
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                self.child = None;
                if status.success() {
                    Ok(PlayerEvent::Finished)
                } else {
                    let code = status.code().unwrap_or(-1);
                    tracing::warn!(player = %self.command, status = code, "player exited abnormally");
                    Err(AudioError::PlayerFailed {
                        command: self.command.clone(),
                        status: code,
                    })
                }
            }
            Ok(None) => Ok(PlayerEvent::NoChange),
            Err(source) => {
                self.child = None;
                tracing::warn!(player = %self.command, error = %source, "failed to poll player");
                Err(AudioError::Spawn {
                    command: self.command.clone(),
                    source,
                })
            }
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Platform default media player command
fn default_player_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else if cfg!(target_os = "windows") {
        "wmplayer"
    } else {
        "mpv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_player_reports_spawn_error() {
        let mut player = AudioPlayer::new(Some("definitely-not-a-real-player".to_string()));
        let err = player.play("lesson.mp3").unwrap_err();
        assert!(matches!(err, AudioError::Spawn { .. }));
        assert!(!player.is_active());
    }

    #[test]
    fn test_poll_without_child_is_quiet() {
        let mut player = AudioPlayer::new(None);
        assert_eq!(player.poll().unwrap(), PlayerEvent::NoChange);
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_exit_reports_finished() {
        let mut player = AudioPlayer::new(Some("true".to_string()));
        player.play("lesson.mp3").unwrap();
        // Wait for the short-lived process to exit
        loop {
            match player.poll().unwrap() {
                PlayerEvent::Finished => break,
                PlayerEvent::NoChange => std::thread::sleep(std::time::Duration::from_millis(10)),
            }
        }
        assert!(!player.is_active());
    }

    #[cfg(unix)]
    #[test]
    fn test_abnormal_exit_is_an_error() {
        let mut player = AudioPlayer::new(Some("false".to_string()));
        player.play("lesson.mp3").unwrap();
        let err = loop {
            match player.poll() {
                Ok(PlayerEvent::NoChange) => {
                    std::thread::sleep(std::time::Duration::from_millis(10))
                }
                Ok(PlayerEvent::Finished) => panic!("expected failure status"),
                Err(e) => break e,
            }
        };
        assert!(matches!(err, AudioError::PlayerFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_kills_running_player() {
        let mut player = AudioPlayer::new(Some("sleep".to_string()));
        player.play("30").unwrap();
        assert!(player.is_active());
        player.stop();
        assert!(!player.is_active());
    }
}
