//! Output file naming.
//!
//! Images are grouped by Wolfram class:
//! - `root/II_Periodic/Rule 4.png`
//! - `root/I_Homogeneous + III_Chaotic/Rule 30 + Rule 0.png`
//!
//! A composed transition goes to the directory of both classes, lower class id first,
//! while the file name keeps the rules in application order.

use crate::{Transition, WolframClass};
use std::path::{Path, PathBuf};

/// Directory (relative to the output root) holding images of `transition`.
pub fn class_dir(transition: Transition) -> String {
    match transition {
        Transition::Single(rule) => WolframClass::of(rule).label().to_string(),
        Transition::Composed(rule, rule2) => {
            let (a, b) = (WolframClass::of(rule), WolframClass::of(rule2));
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            format!("{} + {}", low.label(), high.label())
        }
    }
}

/// Image path of the `run`-th execution of `transition`; run 0 has no suffix.
pub fn output_path(root: &Path, transition: Transition, run: u32) -> PathBuf {
    let stem = match run {
        0 => transition.to_string(),
        run => format!("{} ({})", transition, run),
    };
    root.join(class_dir(transition)).join(format!("{}.png", stem))
}
