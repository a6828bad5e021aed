/// Host platforms the shell distinguishes between.
///
/// Only macOS behaves differently: closing the last window leaves the
/// process running, and reactivating the app brings the window back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether closing the last window should terminate the process.
    pub fn quits_on_last_window_closed(self) -> bool {
        self != Self::MacOs
    }
}

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME theme name first, then the newer color-scheme key
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        let checks: [(&str, &str); 2] = [("gtk-theme", "dark"), ("color-scheme", "prefer-dark")];
        for (key, needle) in checks {
            if let Ok(output) = Command::new("gsettings")
                .args(["get", "org.gnome.desktop.interface", key])
                .output()
            {
                let value = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if value.contains(needle) {
                    return true;
                }
            }
        }
    }

    // macOS: Check AppleInterfaceStyle
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    log::debug!("no dark theme preference detected, using light mode");
    false
}
