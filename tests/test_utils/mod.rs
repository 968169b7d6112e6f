//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};
use chrono::NaiveDate;

use weekmenu::api::AppState;
use weekmenu::api::app;
use weekmenu::core::AppConfig;

pub const SHEET_PATH: &str = "/spreadsheets/d/test-sheet/export?format=csv&gid=0";

/// A sheet with two rotating weeks. `lunes` repeats so the parser
/// splits it after the first `domingo`.
pub const TWO_WEEK_SHEET: &str = "\
,Comida,Cena
Semana A,,
lunes,sopa,pescado
martes,lentejas,tortilla
miércoles,\"arroz, con verduras\",
jueves,,pizza
viernes,paella,
sábado,,
domingo,cocido,crema
Semana B,,
lunes,macarrones,ensalada
martes,garbanzos,
";

/// Serves `sheet` at `SHEET_PATH` on a fresh mock server.
pub async fn sheet_server(status: usize, sheet: &str) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", SHEET_PATH)
        .with_status(status)
        .with_header("content-type", "text/csv")
        .with_body(sheet)
        .create_async()
        .await;
    (server, mock)
}

/// Creates a test application router reading the sheet from
/// `server` with "today" pinned to `today`.
pub fn test_app(server: &mockito::ServerGuard, today: NaiveDate) -> Router {
    let app_config = AppConfig {
        sheet_csv_url: format!("{}{}", server.url(), SHEET_PATH),
        utc_offset_hours: 0,
        today_override: Some(today),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
