//! HTTP handler functions for the `EnviroSense` API.

use actix_web::{HttpResponse, web};
use enviro_sense_ai::AiError;
use enviro_sense_ai::providers::{Message, Role};
use enviro_sense_plant_models::FilterCriteria;
use enviro_sense_plants::garden::garden_impact as estimate_garden;
use enviro_sense_server_models::{
    ApiAqi, ApiEnvironment, ApiError, ApiGardenImpact, ApiHealth, ApiPlant, ApiSolarEstimate,
    ApiTip, ChatError, ChatRequest, ChatResponse, ChatStatus, GardenImpactRequest,
    MATCH_TIER_HEADER, PlantFilterParams, SolarRequest, TipQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/plants`
///
/// Recommends plants for the growing conditions and ailment given as query
/// parameters.
pub async fn list_plants(
    state: web::Data<AppState>,
    params: web::Query<PlantFilterParams>,
) -> HttpResponse {
    recommend(&state, params.into_inner().into())
}

/// `POST /api/plants/recommend`
///
/// Same as [`list_plants`] with the filters in a JSON body.
pub async fn recommend_plants(
    state: web::Data<AppState>,
    body: web::Json<PlantFilterParams>,
) -> HttpResponse {
    recommend(&state, body.into_inner().into())
}

fn recommend(state: &AppState, criteria: FilterCriteria) -> HttpResponse {
    let recommendation = state.catalog.recommend(&criteria);
    log::debug!(
        "Plant recommendation: {criteria:?} -> {} ({} plants)",
        recommendation.tier,
        recommendation.plants.len()
    );

    let plants: Vec<ApiPlant> = recommendation.plants.iter().map(ApiPlant::from).collect();

    HttpResponse::Ok()
        .insert_header((MATCH_TIER_HEADER, recommendation.tier.as_ref()))
        .json(plants)
}

/// `GET /api/plants/{id}`
pub async fn get_plant(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let id = path.into_inner();
    state.catalog.get(id).map_or_else(
        || HttpResponse::NotFound().json(ApiError::new(format!("Plant {id} not found"))),
        |plant| HttpResponse::Ok().json(ApiPlant::from(plant)),
    )
}

/// `POST /api/solar` and `POST /api/solar/calculate`
///
/// Sizes a rooftop solar system for the given daily consumption.
pub async fn solar(body: web::Json<SolarRequest>) -> HttpResponse {
    let daily_kwh = match body.daily_kwh.to_kwh() {
        Ok(kwh) => kwh,
        Err(e) => {
            log::debug!("Rejected solar request: {e}");
            return HttpResponse::BadRequest().json(ApiError::invalid_input());
        }
    };

    let estimate = enviro_sense_solar::estimate(daily_kwh);
    HttpResponse::Ok().json(ApiSolarEstimate::from(estimate))
}

/// `GET /api/aqi/{zip}`
pub async fn aqi(path: web::Path<String>) -> HttpResponse {
    let reading = enviro_sense_air::resolve(&path.into_inner());
    HttpResponse::Ok().json(ApiAqi::from(reading))
}

/// `GET /api/environment/{zip}`
///
/// Air quality plus ambient CO2 and humidity for the dashboard.
pub async fn environment(path: web::Path<String>) -> HttpResponse {
    let snapshot = enviro_sense_air::snapshot(&path.into_inner());
    HttpResponse::Ok().json(ApiEnvironment::from(snapshot))
}

/// `POST /api/garden/impact`
///
/// Estimates the annual CO2 absorption and oxygen output of a set of
/// catalog plants. IDs that are not in the catalog are reported back
/// rather than rejected.
pub async fn garden_impact(
    state: web::Data<AppState>,
    body: web::Json<GardenImpactRequest>,
) -> HttpResponse {
    let mut plants = Vec::with_capacity(body.plant_ids.len());
    let mut unknown_ids = Vec::new();

    for &id in &body.plant_ids {
        match state.catalog.get(id) {
            Some(plant) => plants.push(plant),
            None => unknown_ids.push(id),
        }
    }

    if !unknown_ids.is_empty() {
        log::debug!("Garden impact: ignoring unknown plant ids {unknown_ids:?}");
    }

    let impact = estimate_garden(plants);
    HttpResponse::Ok().json(ApiGardenImpact::new(impact, unknown_ids))
}

/// `GET /api/green-credits`
pub async fn green_credits(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.guide)
}

/// `GET /api/tips/daily`
///
/// The tip for `?date=YYYY-MM-DD`, or for today (UTC).
pub async fn daily_tip(
    state: web::Data<AppState>,
    params: web::Query<TipQueryParams>,
) -> HttpResponse {
    let date = params
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    HttpResponse::Ok().json(ApiTip {
        date,
        tip: state.tips.for_date(date).to_string(),
    })
}

/// `GET /api/chat/status`
pub async fn chat_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ChatStatus {
        available: state.assistant.is_some(),
        provider: state
            .assistant
            .as_ref()
            .map(|a| a.provider_name().to_string()),
    })
}

/// `POST /api/chat`
///
/// Relays one message (plus client-held history) to the chat assistant.
pub async fn chat(state: web::Data<AppState>, body: web::Json<ChatRequest>) -> HttpResponse {
    let Some(assistant) = state.assistant.as_ref() else {
        return HttpResponse::ServiceUnavailable().json(ChatError {
            error: "Chat assistant is not configured".to_string(),
            available: false,
        });
    };

    let ChatRequest { content, history } = body.into_inner();
    let history: Vec<Message> = history
        .into_iter()
        .map(|turn| Message {
            role: Role::from_client(&turn.role),
            content: turn.content,
        })
        .collect();

    match assistant.reply(&content, &history).await {
        Ok(content) => HttpResponse::Ok().json(ChatResponse {
            content,
            available: true,
        }),
        Err(AiError::EmptyMessage) => HttpResponse::BadRequest().json(ChatError {
            error: "Content is required".to_string(),
            available: true,
        }),
        Err(e @ AiError::Timeout { .. }) => {
            log::error!("Chat assistant timed out: {e}");
            HttpResponse::GatewayTimeout().json(ChatError {
                error: e.to_string(),
                available: true,
            })
        }
        Err(e) => {
            log::error!("Chat assistant ({}) failed: {e}", assistant.provider_name());
            HttpResponse::BadGateway().json(ChatError {
                error: "Failed to get response from the assistant".to_string(),
                available: true,
            })
        }
    }
}
