use std::io::Write;
use std::process::Command;

/// Alert capabilities fired by the countdown engine.
///
/// Every method is best-effort: implementations must never block the
/// caller and never report failure. Defaults are no-ops, so a platform
/// missing a capability simply leaves the method alone.
pub trait AlertSink {
    /// Short completion chime
    fn chime(&self) {}

    /// Vibration pattern, alternating on/off milliseconds
    fn vibrate(&self, _pattern: &[u64]) {}

    /// Light pulse acknowledging a control press
    fn haptic(&self) {}
}

/// Fallback capability set with no hardware access at all
pub struct SilentAlerts;

impl AlertSink for SilentAlerts {}

/// Desktop alerts: terminal bell plus the system sound player when one
/// exists. Vibration and haptics have no desktop hardware and stay no-ops.
pub struct DesktopAlerts;

impl AlertSink for DesktopAlerts {
    fn chime(&self) {
        // BEL still reaches the terminal when no sound player is installed
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();

        spawn_sound_player();
    }
}

/// Play the completion sound off-thread so the event loop never waits on it
#[cfg(target_os = "macos")]
fn spawn_sound_player() {
    std::thread::spawn(|| {
        let _ = Command::new("afplay")
            .arg("/System/Library/Sounds/Glass.aiff")
            .output();
    });
}

#[cfg(target_os = "linux")]
fn spawn_sound_player() {
    std::thread::spawn(|| {
        let sound_commands = [
            ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
            ("aplay", "/usr/share/sounds/alsa/Front_Center.wav"),
        ];

        for (cmd, sound_file) in sound_commands.iter() {
            if std::path::Path::new(sound_file).exists() {
                let _ = Command::new(cmd)
                    .arg(sound_file)
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
                break;
            }
        }
    });
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn spawn_sound_player() {}
