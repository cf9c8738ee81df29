//! Output macros for application messages.
//!
//! Every macro takes anything implementing `Display` (usually a
//! [`Message`](super::Message)) and routes it by mode:
//!
//! ```text
//! msg_info!(..) ──▶ TASKMAN_DEBUG set? ──yes──▶ tracing::info!
//!                                     └─no───▶ println!
//! ```
//!
//! - `msg_print!`, `msg_success!`, `msg_info!`, `msg_warning!` go to stdout
//! - `msg_error!` goes to stderr
//! - `msg_debug!` is silent unless debug mode is on
//! - `msg_error_anyhow!` / `msg_bail_anyhow!` build `anyhow` errors
//!
//! ```rust,no_run
//! use taskman::libs::messages::Message;
//! use taskman::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskDeleted("Write report".to_string()));
//! msg_error!(Message::TaskNotFoundWithId(7));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

pub const DEBUG_ENV_VAR: &str = "TASKMAN_DEBUG";

/// Debug mode is on when `TASKMAN_DEBUG` is set; cached.
///
/// `RUST_LOG` only tunes the subscriber filter. It must not reroute
/// regular output, or a `warn` filter would swallow it.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| debug_requested(|key| std::env::var(key).is_ok()))
}

fn debug_requested(is_set: impl Fn(&str) -> bool) -> bool {
    is_set(DEBUG_ENV_VAR)
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
