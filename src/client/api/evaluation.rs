use crate::{
    client::model::error::ApiError,
    model::admin::{EvaluationStatisticsDto, RankingDto},
};

use super::helper::{get, parse_response, send_request};

pub async fn get_rankings() -> Result<Vec<RankingDto>, ApiError> {
    let response = send_request(get("/api/v1/admin/evaluation/rankings")).await?;
    parse_response(response).await
}

pub async fn get_statistics() -> Result<EvaluationStatisticsDto, ApiError> {
    let response = send_request(get("/api/v1/admin/evaluation/statistics")).await?;
    parse_response(response).await
}
