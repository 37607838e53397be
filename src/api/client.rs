//! Blocking HTTP client for the merchandising backend
//!
//! Every collaborator service the planner talks to sits behind one REST
//! API: product stock, dashboard aggregates, insight generation, the
//! team/task service, and layout persistence. Calls are synchronous; the
//! planner treats failures as values and degrades (empty list, unchanged
//! local state) rather than aborting.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::types::*;

/// Errors from backend calls. Nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, bad URL).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
}

/// Typed client over the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Build a client against a base URL like `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        debug!(path, "GET");
        let resp = self.http.get(format!("{}{}", self.base_url, path)).send()?;
        Self::decode(resp, path)
    }

    fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()?;
        Self::decode(resp, path)
    }

    fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        debug!(path, "PUT");
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()?;
        Self::decode(resp, path)
    }

    fn decode<R: DeserializeOwned>(
        resp: reqwest::blocking::Response,
        path: &str,
    ) -> Result<R, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(resp.json()?)
    }

    /// `GET /api/stock`: full product catalog with weekly sales history.
    pub fn fetch_stock(&self) -> Result<StockResponse, ApiError> {
        self.get("/api/stock")
    }

    /// `GET /api/dashboard`: metrics, alerts, and category performance.
    pub fn fetch_dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.get("/api/dashboard")
    }

    /// `POST /api/insights/generate`: analysis text plus one recommended
    /// action for a product over a time window.
    pub fn generate_insight(&self, product_code: &str, time_period: &str) -> Result<AiInsight, ApiError> {
        let req = GenerateInsightRequest {
            product_code: product_code.to_string(),
            time_period: time_period.to_string(),
        };
        let resp: InsightResponse = self.post("/api/insights/generate", &req)?;
        Ok(resp.insight)
    }

    /// `GET /api/recommendations`: every task record.
    pub fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, ApiError> {
        let resp: RecommendationsResponse = self.get("/api/recommendations")?;
        Ok(resp.recommendations)
    }

    /// `POST /api/recommendations/create`: manual task creation.
    pub fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<Recommendation, ApiError> {
        let resp: CreateRecommendationResponse = self.post("/api/recommendations/create", req)?;
        Ok(resp.recommendation)
    }

    /// `POST /api/recommendations/assign`: assign a task (or create one
    /// from an insight) to a team member.
    pub fn assign_recommendation(&self, req: &AssignRequest) -> Result<AssignResponse, ApiError> {
        self.post("/api/recommendations/assign", req)
    }

    /// `PUT /api/recommendations/{id}/status`: task status transition.
    pub fn update_task_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct StatusBody {
            status: TaskStatus,
        }
        #[derive(serde::Deserialize)]
        struct StatusReply {
            #[allow(dead_code)]
            success: bool,
        }
        let path = format!("/api/recommendations/{}/status", task_id);
        let _: StatusReply = self.put(&path, &StatusBody { status })?;
        Ok(())
    }

    /// `GET /api/team/members`: roster keyed by member id.
    pub fn fetch_team_members(
        &self,
    ) -> Result<std::collections::HashMap<String, TeamMember>, ApiError> {
        let resp: TeamMembersResponse = self.get("/api/team/members")?;
        Ok(resp.team_members)
    }

    /// `GET /api/team/{id}/tasks`: tasks assigned to one member.
    pub fn fetch_member_tasks(&self, member_id: &str) -> Result<Vec<Recommendation>, ApiError> {
        let path = format!("/api/team/{}/tasks", member_id);
        let resp: TasksResponse = self.get(&path)?;
        Ok(resp.tasks)
    }

    /// `POST /api/team/action-plan`: detailed plan for carrying out a task.
    pub fn fetch_action_plan(&self, req: &ActionPlanRequest) -> Result<ActionPlan, ApiError> {
        let resp: ActionPlanResponse = self.post("/api/team/action-plan", req)?;
        Ok(resp.action_plan)
    }

    /// `GET /api/layout/load`: every saved layout.
    pub fn fetch_layouts(&self) -> Result<Vec<SavedLayoutRecord>, ApiError> {
        let resp: LayoutsResponse = self.get("/api/layout/load")?;
        Ok(resp.layouts)
    }

    /// `POST /api/layout/save`: persist a named layout snapshot.
    pub fn save_layout(&self, req: &SaveLayoutRequest) -> Result<SaveLayoutResponse, ApiError> {
        self.post("/api/layout/save", req)
    }

    /// `POST /api/layout/update`: mirror one object's committed position.
    pub fn update_layout_object(&self, req: &LayoutUpdateRequest) -> Result<(), ApiError> {
        let _: LayoutUpdateResponse = self.post("/api/layout/update", req)?;
        Ok(())
    }
}
