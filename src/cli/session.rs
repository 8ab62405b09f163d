use super::prompt;
use super::ui::{self, StyleType};
use crate::core::validation::DISPLAY_DATE_FORMAT;
use crate::core::{ExchangeRateProvider, RateQuery, validate_date};
use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const NO_DATA_MESSAGE: &str =
    "Нет данных в ответе от сервера. Попробуйте изменить параметры запроса.";

/// Runs the interactive loop: currency, date, lookup, report, repeat.
///
/// Returns only when `input` is exhausted or the console fails. Lookup
/// failures are reported to the user and never end the loop.
pub async fn run<R: BufRead, W: Write>(
    provider: &dyn ExchangeRateProvider,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    print_greeting(output)?;

    loop {
        let Some(query) = collect_query(input, output)? else {
            info!("Input closed, leaving session");
            return Ok(());
        };

        let result = fetch_rate(provider, &query).await;
        report(output, &query, result)?;
    }
}

fn print_greeting<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", ui::banner_separator())?;
    writeln!(output, "{}", ui::style_text(ui::GREETING, StyleType::Title))?;
    writeln!(output, "{}", ui::banner_separator())?;
    writeln!(output)?;
    Ok(())
}

/// Collects a currency, then dates until one passes validation for it.
fn collect_query<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<RateQuery>> {
    let Some(currency) = prompt::read_currency(input, output)? else {
        return Ok(None);
    };

    loop {
        let Some(date) = prompt::read_date(input, output)? else {
            return Ok(None);
        };

        match validate_date(date, currency, Local::now().date_naive()) {
            Ok(()) => return Ok(Some(RateQuery { currency, date })),
            Err(rejection) => {
                debug!(?rejection, "Date rejected");
                writeln!(output)?;
                writeln!(
                    output,
                    "{}",
                    ui::style_text(&rejection.to_string(), StyleType::Error)
                )?;
            }
        }
    }
}

async fn fetch_rate(provider: &dyn ExchangeRateProvider, query: &RateQuery) -> Result<Decimal> {
    let spinner = ui::new_spinner("Запрос курса в НБУ...");
    let result = provider.get_rate(query).await;
    spinner.finish_and_clear();
    result
}

pub fn format_rate_line(query: &RateQuery, rate: Decimal) -> String {
    format!(
        "Курс валюты {} на дату {} равен {} грн",
        query.currency,
        query.date.format(DISPLAY_DATE_FORMAT),
        rate
    )
}

fn report<W: Write>(output: &mut W, query: &RateQuery, result: Result<Decimal>) -> Result<()> {
    writeln!(output)?;

    match result {
        Ok(rate) => {
            writeln!(output, "{}", ui::report_separator())?;
            writeln!(output)?;
            writeln!(output, "{}", format_rate_line(query, rate))?;
            writeln!(output)?;
        }
        Err(e) => {
            debug!(error = ?e, "Rate lookup failed");
            writeln!(output, "{}", ui::style_text(NO_DATA_MESSAGE, StyleType::Error))?;
            writeln!(output)?;
        }
    }

    writeln!(output, "{}", ui::report_separator())?;
    writeln!(output)?;
    Ok(())
}
