//! 対話式のシリアル番号判定

use crate::checker::check_serial;
use crate::error::{FancySerialError, Result};
use crate::report;
use dialoguer::{Input, Select};
use fancy_serial_common::{Classifier, Condition, Denomination};

/// 入力されたシリアルに対する操作
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    /// 判定する
    Check(String),
    /// 終了
    Quit,
}

/// 空入力・q・quit・exit で終了
pub fn parse_action(input: &str) -> PromptAction {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "q" | "quit" | "exit" => PromptAction::Quit,
        _ => PromptAction::Check(trimmed.to_string()),
    }
}

pub fn run_interactive(
    classifier: &Classifier,
    default_denomination: Denomination,
    default_condition: Condition,
) -> Result<()> {
    println!("シリアル番号を入力してください（空入力または q で終了）\n");

    loop {
        let input: String = Input::new()
            .with_prompt("シリアル番号")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| FancySerialError::Prompt(e.to_string()))?;

        let serial = match parse_action(&input) {
            PromptAction::Quit => break,
            PromptAction::Check(serial) => serial,
        };

        let denomination = select_denomination(default_denomination)?;
        let condition = select_condition(default_condition)?;

        match check_serial(classifier, &serial, denomination, condition) {
            Ok(result) => println!("\n{}", report::render_result(&result)),
            Err(e) => println!("⚠ {}\n", e),
        }
    }

    Ok(())
}

fn select_denomination(default: Denomination) -> Result<Denomination> {
    let items: Vec<String> = Denomination::ALL.iter().map(|d| d.to_string()).collect();
    let default_idx = Denomination::ALL
        .iter()
        .position(|&d| d == default)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("額面")
        .items(&items)
        .default(default_idx)
        .interact()
        .map_err(|e| FancySerialError::Prompt(e.to_string()))?;

    Ok(Denomination::ALL[idx])
}

fn select_condition(default: Condition) -> Result<Condition> {
    let items: Vec<&str> = Condition::ALL.iter().map(|c| c.as_str()).collect();
    let default_idx = Condition::ALL
        .iter()
        .position(|&c| c == default)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("状態")
        .items(&items)
        .default(default_idx)
        .interact()
        .map_err(|e| FancySerialError::Prompt(e.to_string()))?;

    Ok(Condition::ALL[idx])
}
