//! Audio cues emitted by the simulation
//!
//! Fire-and-forget signals for an external audio player. The orchestrator
//! collects them per frame; nothing in the core blocks on playback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    ShotFired,
    JumpLaunch,
    Landing,
}
