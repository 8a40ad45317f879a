use crate::calendar::{build_calendar_at, CalendarMonth};
use crate::completions::{current_streak, is_complete, mark_plank, toggle, total_completed_planks};
use crate::dates::{day_key, parse_day_key};
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CalendarResponse, CompletionKind, ImportResponse, ScheduleResponse,
    SummaryResponse, ToggleRequest, ToggleResponse,
};
use crate::schedule::{weekly_plan, WEEKDAY_SHORT};
use crate::state::AppState;
use crate::storage::{export_file_name, export_state, import_state, persist_state};
use crate::timer::{self, TimerSnapshot};
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.clock.today();
    let month = CalendarMonth::containing(today);
    Html(render_index(&day_key(today), &month.label()))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    Ok(Json(summary(&state).await))
}

pub async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let data = state.data.lock().await;
    Json(ScheduleResponse {
        tracking_start_date: day_key(data.tracking_start_date),
        plan: weekly_plan(),
    })
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = state.clock.today();
    let current = CalendarMonth::containing(today);
    let out_of_range = || AppError::bad_request("month is out of range");
    let month = CalendarMonth::new(
        query.year.unwrap_or(current.year()),
        query.month.unwrap_or(current.month0() as i32),
    )
    .ok_or_else(out_of_range)?;
    let month = match query.nav.as_deref().map(str::trim) {
        None | Some("") => Some(month),
        Some("prev") => month.previous(),
        Some("next") => month.next(),
        Some(other) => {
            return Err(AppError::bad_request(format!(
                "nav must be 'prev' or 'next', got '{other}'"
            )));
        }
    }
    .ok_or_else(out_of_range)?;

    let cells = {
        let data = state.data.lock().await;
        build_calendar_at(today, month, &data).ok_or_else(out_of_range)?
    };
    Ok(Json(CalendarResponse {
        year: month.year(),
        month: month.month0(),
        label: month.label(),
        weekdays: WEEKDAY_SHORT,
        cells,
    }))
}

pub async fn post_toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let kind: CompletionKind = payload.kind.parse().map_err(AppError::bad_request)?;
    let date = parse_day_key(&payload.date)
        .ok_or_else(|| AppError::bad_request("date must be a YYYY-MM-DD day key"))?;
    let key = day_key(date);

    let mut data = state.data.lock().await;
    let completed = toggle(&mut data, kind, &key);
    persist_state(&state.data_path, &data).await?;
    info!(%kind, date = %key, completed, "toggled completion");

    Ok(Json(ToggleResponse {
        kind: kind.to_string(),
        date: key,
        completed,
    }))
}

pub async fn post_mark_plank(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    {
        let today = state.clock.today();
        let mut data = state.data.lock().await;
        mark_plank(&mut data, today);
        persist_state(&state.data_path, &data).await?;
        info!(%today, "marked plank complete");
    }
    Ok(Json(summary(&state).await))
}

pub async fn get_timer(State(state): State<AppState>) -> Json<TimerSnapshot> {
    Json(timer::timer_snapshot(&state).await)
}

pub async fn post_timer_start(State(state): State<AppState>) -> Json<TimerSnapshot> {
    Json(timer::start_timer(&state).await)
}

pub async fn post_timer_pause(State(state): State<AppState>) -> Json<TimerSnapshot> {
    Json(timer::pause_timer(&state).await)
}

pub async fn post_timer_reset(State(state): State<AppState>) -> Json<TimerSnapshot> {
    Json(timer::reset_timer(&state).await)
}

pub async fn get_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let file_name = export_file_name(state.clock.today());
    let payload = {
        let data = state.data.lock().await;
        export_state(&data).map_err(AppError::internal)?
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        payload,
    ))
}

pub async fn post_import(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportResponse>, AppError> {
    let incoming = import_state(&body, state.clock.today()).map_err(|err| {
        warn!("import rejected: {err}");
        AppError::from(err)
    })?;

    let mut data = state.data.lock().await;
    *data = incoming;
    persist_state(&state.data_path, &data).await?;
    info!(
        plank_days = data.plank_completions.len(),
        workout_days = data.workout_completions.len(),
        "imported tracking state"
    );

    Ok(Json(ImportResponse {
        message: "Data imported successfully.",
        tracking_start_date: day_key(data.tracking_start_date),
        plank_days: data.plank_completions.len(),
        workout_days: data.workout_completions.len(),
    }))
}

async fn summary(state: &AppState) -> SummaryResponse {
    let today = state.clock.today();
    let key = day_key(today);
    let (plank_done_today, streak, total_planks, tracking_start_date) = {
        let data = state.data.lock().await;
        (
            is_complete(&data, CompletionKind::Plank, &key),
            current_streak(&data, today),
            total_completed_planks(&data),
            day_key(data.tracking_start_date),
        )
    };

    SummaryResponse {
        today: key,
        plank_done_today,
        streak,
        total_planks,
        tracking_start_date,
        timer: timer::timer_snapshot(state).await,
    }
}
