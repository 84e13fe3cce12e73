//! Thin wrappers over dialoguer so screens share one theme and error path.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::errors::QuoteError;

pub fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Free-form text input pre-filled with the current value. Empty input is
/// allowed; the validators decide what a missing value means.
pub fn text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String, QuoteError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial.to_string());
    }
    Ok(input.interact_text()?)
}

/// Single choice from a list; returns the selected index.
pub fn select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
    default: usize,
) -> Result<usize, QuoteError> {
    Ok(Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?)
}

/// Multiple choice with pre-checked defaults; returns the selected indices.
pub fn multi_select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
    checked: &[bool],
) -> Result<Vec<usize>, QuoteError> {
    let defaults: Vec<(String, bool)> = items
        .iter()
        .cloned()
        .zip(checked.iter().copied())
        .collect();
    Ok(MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items_checked(&defaults)
        .interact()?)
}

pub fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, QuoteError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
