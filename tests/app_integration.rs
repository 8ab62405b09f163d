use std::fs;
use std::io::Cursor;
use tracing::{error, info};

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const EXCHANGE_PATH: &str = "/NBUStatService/v1/statdirectory/exchange";

    pub async fn create_nbu_mock_server(
        date: &str,
        valcode: &str,
        status: u16,
        mock_response: &str,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(EXCHANGE_PATH))
            .and(query_param("date", date))
            .and(query_param("valcode", valcode))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
            providers:
              nbu:
                base_url: {base_url}
            "#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

async fn run_scripted_session(config_path: &str, script: &str) -> String {
    let config = nbu_rate::load_config(Some(config_path)).expect("Failed to load config");
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();

    let result = nbu_rate::run_session(&config, &mut input, &mut output).await;
    assert!(result.is_ok(), "Session failed with: {:?}", result.err());

    String::from_utf8(output).expect("Output is not UTF-8")
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_response =
        r#"[{"r030":840,"txt":"Долар США","rate":27.5,"cc":"USD","exchangedate":"05.06.2020"}]"#;
    let mock_server = test_utils::create_nbu_mock_server("20200605", "USD", 200, mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let output = run_scripted_session(
        config_file.path().to_str().unwrap(),
        "xyz\n usd \nnot a date\n05.06.2099\n05.06.2020\n",
    )
    .await;

    info!(%output, "Session output");
    assert!(output.contains("ДОБРО ПОЖАЛОВАТЬ В КОНВЕРТЕР ВАЛЮТ! (КУРС ПО НБУ)"));
    assert!(output.contains("Неверная валюта. Повторите ввод."));
    assert!(output.contains("Неверный формат даты. Повторите еще раз."));
    assert!(output.contains("Вы выбрали дату из будущего. Повторите ввод даты."));
    assert!(output.contains("Курс валюты USD на дату 05.06.2020 равен 27.5 грн"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("date=20200605&json&valcode=USD")
    );
}

#[test_log::test(tokio::test)]
async fn test_empty_response_reports_no_data_and_continues() {
    let mock_server = test_utils::create_nbu_mock_server("19970101", "RUB", 200, "[]").await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let output = run_scripted_session(
        config_file.path().to_str().unwrap(),
        "rub\n01/01/1997\n",
    )
    .await;

    assert!(output.contains("Нет данных в ответе от сервера. Попробуйте изменить параметры запроса."));
    assert!(!output.contains("Курс валюты"));
    assert_eq!(output.matches("Введите код валюты").count(), 2);
}

#[test_log::test(tokio::test)]
async fn test_server_error_reports_no_data() {
    let mock_server =
        test_utils::create_nbu_mock_server("20200605", "EUR", 503, "Service Unavailable").await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let output = run_scripted_session(
        config_file.path().to_str().unwrap(),
        "eur\n1998-12-31\n2020-06-05\n",
    )
    .await;

    assert!(output.contains("Евро была введена в оборот 1 января 1999 года. На дату 31.12.1998"));
    assert!(output.contains("Нет данных в ответе от сервера. Попробуйте изменить параметры запроса."));

    // The pre-euro date never reaches the server
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_invalid_explicit_config_fails() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), "providers: [").expect("Failed to write config file");

    let result = nbu_rate::run_command(
        nbu_rate::AppCommand::Session,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
#[ignore = "requires network access to bank.gov.ua"]
async fn test_real_nbu_api() {
    use chrono::NaiveDate;
    use nbu_rate::core::{CurrencyCode, ExchangeRateProvider, RateQuery};
    use nbu_rate::providers::NbuProvider;

    let provider = NbuProvider::new("https://bank.gov.ua").unwrap();
    let query = RateQuery {
        currency: CurrencyCode::Usd,
        date: NaiveDate::from_ymd_opt(2020, 6, 5).unwrap(),
    };
    info!(?query, "Fetching rate from NBU");

    match provider.get_rate(&query).await {
        Ok(rate) => {
            info!(%rate, "Received successful rate response");
            assert!(rate > rust_decimal::Decimal::ZERO, "Rate should be positive");
        }
        Err(e) => {
            error!("NBU API request failed: {e}\n{e:?}");
            panic!("NBU API request failed: {e}");
        }
    }
}
