//! Wire types for the merchandising backend
//!
//! Field names and shapes follow the backend's JSON payloads verbatim, so
//! these structs serialize straight onto the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::editor::PlacedObject;

/// A product in the stock catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_code: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub margin_percentage: f64,
}

/// One week of sales figures for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySales {
    pub week_number: u32,
    pub units_sold: i64,
    pub revenue: f64,
    pub profit: f64,
    pub stock_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub weekly_sales: HashMap<String, Vec<WeeklySales>>,
}

/// Task priority, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse the wire tag, as also typed in console commands.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Task status transitions: pending -> in_progress -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse the wire tag, as also typed in console commands.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A merchandising task / AI recommendation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub product_code: Option<String>,
    pub action: String,
    pub reason: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRecommendationRequest {
    pub action: String,
    pub reason: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendationResponse {
    pub recommendation: Recommendation,
}

/// Assignment request; `action`/`reason` present when creating a task
/// straight from a generated insight.
#[derive(Debug, Clone, Serialize)]
pub struct AssignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_id: Option<String>,
    pub team_member: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

/// A member of the store team. The backend keys the roster map by member
/// id; the record itself carries no id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub email: String,
    pub tasks_completed: i64,
    pub tasks_total: i64,
    pub success_rate: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembersResponse {
    pub team_members: HashMap<String, TeamMember>,
}

/// AI-generated product analysis plus one recommended action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub product_code: String,
    pub product_name: String,
    pub time_period: String,
    pub analysis: String,
    pub recommendation: InsightRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecommendation {
    pub action: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateInsightRequest {
    pub product_code: String,
    pub time_period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsightResponse {
    pub insight: AiInsight,
}

/// Step-by-step action plan generated for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub steps: Vec<String>,
    pub tools_needed: Vec<String>,
    pub safety_notes: Vec<String>,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionPlanRequest {
    pub recommendation: ActionPlanRecommendation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionPlanRecommendation {
    pub action: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionPlanResponse {
    pub action_plan: ActionPlan,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardMetrics {
    pub total_sales: f64,
    pub total_units: i64,
    pub total_transactions: i64,
    pub total_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LowStockAlert {
    pub product_code: String,
    pub name: String,
    pub current_stock: i64,
    pub avg_weekly_sales: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlowMover {
    pub product_code: String,
    pub name: String,
    pub avg_weekly_sales: f64,
    pub weeks_below_threshold: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardAlerts {
    pub low_stock: Vec<LowStockAlert>,
    pub slow_movers: Vec<SlowMover>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopPerformer {
    pub product_code: String,
    pub name: String,
    pub total_units: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryPerformance {
    pub revenue: f64,
    pub units: i64,
}

/// Aggregate returned by `GET /api/dashboard`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub alerts: DashboardAlerts,
    pub top_performers: Vec<TopPerformer>,
    pub category_performance: HashMap<String, CategoryPerformance>,
}

/// A saved layout as the backend stores it. The timestamp is echoed back
/// verbatim, so it stays a string on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayoutRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub objects: Vec<PlacedObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutsResponse {
    pub layouts: Vec<SavedLayoutRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveLayoutRequest {
    pub name: String,
    pub layout: Vec<PlacedObject>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveLayoutResponse {
    pub success: bool,
    pub layout_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Position mirror for one committed move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutUpdateRequest {
    pub object_id: String,
    pub x: i32,
    pub y: i32,
    pub rotation: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutUpdateResponse {
    pub success: bool,
}
