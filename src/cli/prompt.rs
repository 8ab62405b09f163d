//! Line-oriented prompts for the interactive session.
//!
//! Readers return `Ok(None)` once the input is exhausted, which the session
//! treats the same as the user interrupting the program.

use super::ui::{self, StyleType};
use crate::core::{CurrencyCode, parse_date};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

/// Reads one line, replacing invalid UTF-8 so a garbled line is rejected by
/// the parsers instead of ending the session.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn currency_prompt() -> String {
    let codes: Vec<&str> = CurrencyCode::ALL.iter().map(|c| c.code()).collect();
    format!(
        "Введите код валюты ({}) или Ctrl + C для выхода: ",
        codes.join("/")
    )
}

/// Asks for a currency code until one of the supported codes is entered.
pub fn read_currency<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<CurrencyCode>> {
    loop {
        write!(output, "{}", currency_prompt())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.parse::<CurrencyCode>() {
            Ok(currency) => return Ok(Some(currency)),
            Err(e) => {
                debug!(error = %e, "Rejected currency input");
                writeln!(output)?;
                writeln!(
                    output,
                    "{}",
                    ui::style_text("Неверная валюта. Повторите ввод.", StyleType::Error)
                )?;
                writeln!(output)?;
            }
        }
    }
}

/// Asks for a date until the input parses. No range checks happen here.
pub fn read_date<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<NaiveDate>> {
    loop {
        writeln!(output)?;
        write!(
            output,
            "Введите дату (форматы: ДД.ММ.ГГГГ, ДД/ММ/ГГГГ, ГГГГ-ММ-ДД): "
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        if let Some(date) = parse_date(&line) {
            return Ok(Some(date));
        }

        debug!(input = %line.trim(), "Rejected date input");
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            ui::style_text("Неверный формат даты. Повторите еще раз.", StyleType::Error)
        )?;
    }
}
