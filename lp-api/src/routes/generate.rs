use axum::{extract::State, Json};
use lp_app::domain::{Brief, LpPlan};
use lp_app::AppContext;
use lp_errors::AppError;

pub async fn generate(
    State(ctx): State<AppContext>,
    Json(brief): Json<Brief>,
) -> Result<Json<LpPlan>, AppError> {
    match ctx.generate_lp.execute(&brief).await {
        Ok(plan) => Ok(Json(plan)),
        Err(e) => {
            tracing::error!("LP generation failed: {}", e);
            Err(e)
        }
    }
}
