use std::fmt::Display;

use colored::Colorize;

#[macro_export]
macro_rules! log {
    ($kind:literal: $fmt:expr $(, $args:expr)*) => {
        $crate::log::log($kind, format_args!($fmt $(, $args)*))
    };
}

pub fn log<D: Display>(kind: &str, msg: D) {
    eprintln!("{:>10} {msg}", kind.bright_green());
}
