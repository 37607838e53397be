//! Planner: wires the editor to the backend, the sync worker, and the
//! session
//!
//! Every console command commits its local transition first; service
//! calls happen afterwards and degrade without touching editor state.
//! Offline (no API client) every local operation still works.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use crate::api::{
    ActionPlanRecommendation, ActionPlanRequest, ApiClient, AssignRequest,
    CreateRecommendationRequest, LayoutUpdateRequest, Priority, Recommendation, SaveLayoutRequest,
    SavedLayoutRecord, TaskStatus,
};
use crate::config::AppConfig;
use crate::console::Command;
use crate::editor::{FixtureCatalog, FixtureDefinition, LayoutEditor, LayoutSnapshot, ObjectId};
use crate::render::{render_svg, SvgConfig};
use crate::session::{Role, Session, User};
use crate::sync::PositionSync;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to write SVG output: {0}")]
    Io(#[from] std::io::Error),
}

/// The planning application: editor state plus its collaborators.
pub struct Planner {
    editor: LayoutEditor,
    client: Option<ApiClient>,
    sync: Option<PositionSync>,
    session: Session,
    session_path: PathBuf,
    svg_config: SvgConfig,
    /// Saved layouts as last fetched; `load <i>` indexes into this.
    layouts: Vec<SavedLayoutRecord>,
    /// Tasks as last fetched; `assign`/`status`/`plan` index into this.
    tasks: Vec<Recommendation>,
}

impl Planner {
    /// Build a planner from config. `client` is `None` in offline mode;
    /// position sync is only spawned when a backend is reachable by
    /// construction.
    pub fn new(config: &AppConfig, client: Option<ApiClient>) -> Self {
        let session = match Session::load(&config.session.file) {
            Ok(session) => session,
            Err(err) => {
                warn!(%err, "session file unreadable; starting fresh");
                Session::default()
            }
        };
        let sync = client.clone().map(PositionSync::spawn);
        Self {
            editor: LayoutEditor::new(config.grid(), FixtureCatalog::builtin()),
            client,
            sync,
            session,
            session_path: config.session.file.clone(),
            svg_config: SvgConfig::default(),
            layouts: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn editor(&self) -> &LayoutEditor {
        &self.editor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn cached_layouts(&self) -> &[SavedLayoutRecord] {
        &self.layouts
    }

    /// Execute one parsed command. The returned string is the user-facing
    /// outcome; validation rejections and degraded service calls report
    /// there instead of erroring. Only local I/O (SVG export) can fail.
    pub fn execute(&mut self, command: &Command) -> Result<String, PlannerError> {
        match command {
            Command::Add { type_key } => Ok(match self.editor.add_object(type_key) {
                Some(obj) => format!("Added {} ({})", obj.display_name, obj.id),
                None => format!("No fixture type '{}' in the catalog", type_key),
            }),
            Command::Select { id } => {
                let target = id.as_deref().map(ObjectId::from);
                let cleared = target.is_none();
                Ok(if self.editor.select(target) {
                    if cleared {
                        "Selection cleared".to_string()
                    } else {
                        format!("Selected {}", id.as_deref().unwrap_or_default())
                    }
                } else {
                    format!("No object '{}'", id.as_deref().unwrap_or_default())
                })
            }
            Command::Move { id, x, y } => {
                let id = ObjectId::from(id.as_str());
                match self.editor.move_object(&id, *x, *y) {
                    Some((sx, sy)) => {
                        self.mirror_position(&id, sx, sy);
                        Ok(format!("Moved {} to ({}, {})", id, sx, sy))
                    }
                    None => Ok(format!("No object '{}'", id)),
                }
            }
            Command::Enlarge => {
                let applied = self.editor.enlarge_selected();
                Ok(self.report_transform(applied))
            }
            Command::Shrink => {
                let applied = self.editor.shrink_selected();
                Ok(self.report_transform(applied))
            }
            Command::Rotate => {
                // rotate_selected is a no-op exactly when nothing is
                // selected, so the selection read below covers both cases.
                self.editor.rotate_selected();
                Ok(match self.editor.selected() {
                    Some(obj) => format!("Rotated {} to {}°", obj.id, obj.rotation_degrees),
                    None => "Nothing selected".to_string(),
                })
            }
            Command::Rename { name } => Ok(if self.editor.rename_selected(name) {
                format!("Renamed selection to \"{}\"", name)
            } else if name.is_empty() {
                "Name must not be empty".to_string()
            } else {
                "Nothing selected".to_string()
            }),
            Command::Delete => Ok(if self.editor.delete_selected() {
                "Deleted selection".to_string()
            } else {
                "Nothing selected".to_string()
            }),
            Command::DefType {
                key,
                label,
                width,
                height,
                real_world_size,
                thumbnail,
            } => {
                let mut def = FixtureDefinition::new(key.clone(), label.clone(), *width, *height);
                if let Some(size) = real_world_size {
                    def = def.with_real_world_size(size.clone());
                }
                if let Some(thumb) = thumbnail {
                    def = def.with_thumbnail(thumb.clone());
                }
                Ok(match self.editor.register_fixture(def) {
                    Ok(()) => format!("Registered fixture type '{}'", key),
                    Err(err) => err.to_string(),
                })
            }
            Command::DropType { key, confirmed } => {
                if !*confirmed {
                    return Ok(format!(
                        "Removing '{}' deletes all objects of that type; repeat with 'confirm'",
                        key
                    ));
                }
                Ok(match self.editor.remove_fixture(key, true) {
                    Ok(removed) => {
                        format!("Removed fixture type '{}' and {} object(s)", key, removed)
                    }
                    Err(err) => err.to_string(),
                })
            }
            Command::Types => Ok(self.format_types()),
            Command::List => Ok(self.format_objects()),
            Command::Save { name } => Ok(self.save_layout(name)),
            Command::Layouts => Ok(self.refresh_layouts()),
            Command::Load { index } => Ok(self.load_layout(*index)),
            Command::Render { path } => self.render_to_file(Path::new(path)),
            Command::Stock => Ok(self.show_stock()),
            Command::Dashboard => Ok(self.show_dashboard()),
            Command::Insight {
                product_code,
                time_period,
            } => Ok(self.show_insight(product_code, time_period)),
            Command::Team => Ok(self.show_team()),
            Command::Tasks { member } => Ok(self.refresh_tasks(member.as_deref())),
            Command::NewTask {
                action,
                reason,
                priority,
            } => Ok(self.create_task(action, reason, priority)),
            Command::Assign { index, member } => Ok(self.assign_task(*index, member)),
            Command::Status { index, status } => Ok(self.update_task(*index, status)),
            Command::Plan { index } => Ok(self.show_plan(*index)),
            Command::Login {
                id,
                email,
                name,
                role,
            } => Ok(self.login(id, email, name, role)),
            Command::Logout => Ok(self.logout()),
        }
    }

    fn report_transform(&self, applied: bool) -> String {
        match self.editor.selected() {
            Some(obj) if applied => format!("Scaled {} to {}x", obj.id, obj.scale),
            _ => "Nothing selected".to_string(),
        }
    }

    /// Queue the committed position for the backend mirror. Fire and
    /// forget: the local move already happened.
    fn mirror_position(&self, id: &ObjectId, x: i32, y: i32) {
        let Some(sync) = &self.sync else {
            return;
        };
        let rotation = self
            .editor
            .get(id)
            .map(|o| o.rotation_degrees)
            .unwrap_or(0);
        sync.enqueue(LayoutUpdateRequest {
            object_id: id.to_string(),
            x,
            y,
            rotation,
        });
    }

    fn format_types(&self) -> String {
        let defs = self.editor.catalog().sorted();
        if defs.is_empty() {
            return "Catalog is empty".to_string();
        }
        defs.iter()
            .map(|d| {
                format!(
                    "{:<14} {} ({}x{}px, {})",
                    d.key, d.label, d.base_width, d.base_height, d.real_world_size
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_objects(&self) -> String {
        if self.editor.objects().is_empty() {
            return "Canvas is empty".to_string();
        }
        self.editor
            .objects()
            .iter()
            .map(|o| {
                let marker = if self.editor.selected_id() == Some(&o.id) {
                    "*"
                } else {
                    " "
                };
                format!(
                    "{}{:<14} \"{}\" at ({}, {}) scale {} rotation {}°",
                    marker, o.id, o.display_name, o.x, o.y, o.scale, o.rotation_degrees
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Snapshot, submit, and refresh the layout list. Persistence is
    /// best-effort; local state is never affected by failure.
    fn save_layout(&mut self, name: &str) -> String {
        let Some(snapshot) = self.editor.snapshot(name) else {
            return "Layout name must not be empty".to_string();
        };
        let Some(client) = &self.client else {
            return "Offline: layout not saved".to_string();
        };
        let request = SaveLayoutRequest {
            name: snapshot.name.clone(),
            layout: snapshot.objects.clone(),
            timestamp: snapshot.timestamp.to_rfc3339(),
        };
        match client.save_layout(&request) {
            Ok(resp) => {
                self.layouts = client.fetch_layouts().unwrap_or_else(|err| {
                    warn!(%err, "failed to refresh layout list after save");
                    Vec::new()
                });
                format!(
                    "Saved layout \"{}\" as {} ({} saved layouts)",
                    name,
                    resp.layout_id,
                    self.layouts.len()
                )
            }
            Err(err) => {
                warn!(%err, "failed to save layout");
                format!("Could not save layout \"{}\": {}", name, err)
            }
        }
    }

    /// Fetch the saved-layout list; empty on failure, not an error.
    fn refresh_layouts(&mut self) -> String {
        let Some(client) = &self.client else {
            return "Offline: no saved layouts available".to_string();
        };
        self.layouts = match client.fetch_layouts() {
            Ok(layouts) => layouts,
            Err(err) => {
                warn!(%err, "failed to fetch layouts");
                Vec::new()
            }
        };
        if self.layouts.is_empty() {
            return "No saved layouts".to_string();
        }
        self.layouts
            .iter()
            .enumerate()
            .map(|(i, l)| {
                format!(
                    "{}. \"{}\" ({} objects{})",
                    i + 1,
                    l.name,
                    l.objects.len(),
                    l.timestamp
                        .as_deref()
                        .map(|t| format!(", {}", t))
                        .unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the live collection from the cached list (1-based index).
    fn load_layout(&mut self, index: usize) -> String {
        let Some(record) = index.checked_sub(1).and_then(|i| self.layouts.get(i)) else {
            return format!(
                "No layout {} (run 'layouts' first; {} cached)",
                index,
                self.layouts.len()
            );
        };
        let snapshot = snapshot_from_record(record);
        self.editor.load_snapshot(&snapshot);
        format!(
            "Loaded \"{}\" ({} objects)",
            snapshot.name,
            snapshot.objects.len()
        )
    }

    /// `GET /api/stock`, rendered as one product per line.
    fn show_stock(&self) -> String {
        let Some(client) = &self.client else {
            return "Offline: stock data unavailable".to_string();
        };
        match client.fetch_stock() {
            Ok(stock) => {
                if stock.products.is_empty() {
                    return "No products in stock".to_string();
                }
                stock
                    .products
                    .iter()
                    .map(|p| {
                        format!(
                            "{:<14} {} ({}, {} {}) ${:.2}",
                            p.product_code, p.name, p.category, p.color, p.size, p.selling_price
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Err(err) => {
                warn!(%err, "failed to fetch stock");
                format!("Could not fetch stock: {}", err)
            }
        }
    }

    /// `GET /api/dashboard`: headline metrics, then alerts and top sellers.
    fn show_dashboard(&self) -> String {
        let Some(client) = &self.client else {
            return "Offline: dashboard unavailable".to_string();
        };
        match client.fetch_dashboard() {
            Ok(dashboard) => {
                let mut lines = vec![format!(
                    "Sales ${:.2} | {} units | {} transactions | profit ${:.2}",
                    dashboard.metrics.total_sales,
                    dashboard.metrics.total_units,
                    dashboard.metrics.total_transactions,
                    dashboard.metrics.total_profit
                )];
                for alert in &dashboard.alerts.low_stock {
                    lines.push(format!(
                        "LOW STOCK  {} {} ({} left, sells {}/week)",
                        alert.product_code, alert.name, alert.current_stock, alert.avg_weekly_sales
                    ));
                }
                for slow in &dashboard.alerts.slow_movers {
                    lines.push(format!(
                        "SLOW MOVER {} {} ({:.1}/week for {} weeks)",
                        slow.product_code, slow.name, slow.avg_weekly_sales,
                        slow.weeks_below_threshold
                    ));
                }
                for top in &dashboard.top_performers {
                    lines.push(format!(
                        "TOP SELLER {} {} ({} units, ${:.2})",
                        top.product_code, top.name, top.total_units, top.total_revenue
                    ));
                }
                lines.join("\n")
            }
            Err(err) => {
                warn!(%err, "failed to fetch dashboard");
                format!("Could not fetch dashboard: {}", err)
            }
        }
    }

    /// `POST /api/insights/generate` for one product and time window.
    fn show_insight(&self, product_code: &str, time_period: &str) -> String {
        let Some(client) = &self.client else {
            return "Offline: insight generation unavailable".to_string();
        };
        match client.generate_insight(product_code, time_period) {
            Ok(insight) => format!(
                "{} ({}, {}):\n{}\nRecommended: {} ({})",
                insight.product_name,
                insight.product_code,
                insight.time_period,
                insight.analysis,
                insight.recommendation.action,
                insight.recommendation.reason
            ),
            Err(err) => {
                warn!(%err, "failed to generate insight");
                format!("Could not generate insight for {}: {}", product_code, err)
            }
        }
    }

    /// `GET /api/team/members`, in id order.
    fn show_team(&self) -> String {
        let Some(client) = &self.client else {
            return "Offline: team roster unavailable".to_string();
        };
        match client.fetch_team_members() {
            Ok(members) => {
                if members.is_empty() {
                    return "No team members".to_string();
                }
                let mut rows: Vec<_> = members.iter().collect();
                rows.sort_by(|a, b| a.0.cmp(b.0));
                rows.iter()
                    .map(|(id, m)| {
                        format!(
                            "{:<10} {} ({}) {}/{} tasks, {}% success",
                            id, m.name, m.role, m.tasks_completed, m.tasks_total, m.success_rate
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Err(err) => {
                warn!(%err, "failed to fetch team roster");
                format!("Could not fetch team roster: {}", err)
            }
        }
    }

    /// Fetch all tasks (or one member's) into the cache; empty on failure.
    fn refresh_tasks(&mut self, member: Option<&str>) -> String {
        let Some(client) = &self.client else {
            return "Offline: no tasks available".to_string();
        };
        let fetched = match member {
            Some(id) => client.fetch_member_tasks(id),
            None => client.fetch_recommendations(),
        };
        self.tasks = match fetched {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(%err, "failed to fetch tasks");
                Vec::new()
            }
        };
        if self.tasks.is_empty() {
            return "No tasks".to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                format!(
                    "{}. [{}] [{}] {} ({}){}",
                    i + 1,
                    t.priority.as_key(),
                    t.status.as_key(),
                    t.action,
                    t.reason,
                    t.assigned_to
                        .as_deref()
                        .map(|m| format!(", assigned to {}", m))
                        .unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `POST /api/recommendations/create` from console arguments.
    fn create_task(&mut self, action: &str, reason: &str, priority: &str) -> String {
        let Some(priority) = Priority::parse_key(priority) else {
            return format!("Unknown priority '{}' (use low, medium, or high)", priority);
        };
        let Some(client) = &self.client else {
            return "Offline: task not created".to_string();
        };
        let request = CreateRecommendationRequest {
            action: action.to_string(),
            reason: reason.to_string(),
            priority,
            product_code: None,
        };
        match client.create_recommendation(&request) {
            Ok(task) => {
                let id = task.id.clone();
                self.tasks.push(task);
                format!("Created task {} ({})", id, action)
            }
            Err(err) => {
                warn!(%err, "failed to create task");
                format!("Could not create task: {}", err)
            }
        }
    }

    /// `POST /api/recommendations/assign` for a cached task (1-based).
    fn assign_task(&self, index: usize, member: &str) -> String {
        let Some(task) = index.checked_sub(1).and_then(|i| self.tasks.get(i)) else {
            return format!(
                "No task {} (run 'tasks' first; {} cached)",
                index,
                self.tasks.len()
            );
        };
        let Some(client) = &self.client else {
            return "Offline: task not assigned".to_string();
        };
        let request = AssignRequest {
            insight_id: Some(task.id.clone()),
            team_member: member.to_string(),
            action: None,
            reason: None,
            product_code: None,
        };
        match client.assign_recommendation(&request) {
            Ok(resp) if resp.success => format!("Assigned task {} to {}", task.id, member),
            Ok(_) => format!("Backend declined to assign task {}", task.id),
            Err(err) => {
                warn!(%err, "failed to assign task");
                format!("Could not assign task {}: {}", task.id, err)
            }
        }
    }

    /// `PUT /api/recommendations/{id}/status` for a cached task (1-based).
    fn update_task(&self, index: usize, status: &str) -> String {
        let Some(status) = TaskStatus::parse_key(status) else {
            return format!(
                "Unknown status '{}' (use pending, in_progress, or completed)",
                status
            );
        };
        let Some(task) = index.checked_sub(1).and_then(|i| self.tasks.get(i)) else {
            return format!(
                "No task {} (run 'tasks' first; {} cached)",
                index,
                self.tasks.len()
            );
        };
        let Some(client) = &self.client else {
            return "Offline: task status unchanged".to_string();
        };
        match client.update_task_status(&task.id, status) {
            Ok(()) => format!("Task {} is now {}", task.id, status.as_key()),
            Err(err) => {
                warn!(%err, "failed to update task status");
                format!("Could not update task {}: {}", task.id, err)
            }
        }
    }

    /// `POST /api/team/action-plan` for a cached task (1-based).
    fn show_plan(&self, index: usize) -> String {
        let Some(task) = index.checked_sub(1).and_then(|i| self.tasks.get(i)) else {
            return format!(
                "No task {} (run 'tasks' first; {} cached)",
                index,
                self.tasks.len()
            );
        };
        let Some(client) = &self.client else {
            return "Offline: action plan unavailable".to_string();
        };
        let request = ActionPlanRequest {
            recommendation: ActionPlanRecommendation {
                action: task.action.clone(),
                reason: task.reason.clone(),
                product_code: task.product_code.clone(),
            },
        };
        match client.fetch_action_plan(&request) {
            Ok(plan) => {
                let mut lines: Vec<String> = plan
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step))
                    .collect();
                if !plan.tools_needed.is_empty() {
                    lines.push(format!("Tools: {}", plan.tools_needed.join(", ")));
                }
                if !plan.safety_notes.is_empty() {
                    lines.push(format!("Safety: {}", plan.safety_notes.join("; ")));
                }
                lines.push(format!("Estimated time: {}", plan.estimated_time));
                lines.join("\n")
            }
            Err(err) => {
                warn!(%err, "failed to fetch action plan");
                format!("Could not fetch action plan for task {}: {}", task.id, err)
            }
        }
    }

    /// Sign a user in and persist the session. Identity stays local; no
    /// backend call is involved.
    fn login(&mut self, id: &str, email: &str, name: &str, role: &str) -> String {
        let Some(role) = Role::parse_key(role) else {
            return format!(
                "Unknown role '{}' (use associate, manager, or visual_merchandiser)",
                role
            );
        };
        self.session.sign_in(User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        });
        self.persist_session();
        format!("Signed in as {} ({})", name, email)
    }

    fn logout(&mut self) -> String {
        if self.session.current_user.is_none() {
            return "Nobody is signed in".to_string();
        }
        self.session.sign_out();
        self.persist_session();
        "Signed out".to_string()
    }

    fn persist_session(&self) {
        if let Err(err) = self.session.save(&self.session_path) {
            warn!(%err, "failed to persist session");
        }
    }

    /// Export the canvas as SVG and record the capture in the session's
    /// scene gallery.
    fn render_to_file(&mut self, path: &Path) -> Result<String, PlannerError> {
        let svg = render_svg(&self.editor, &self.svg_config);
        std::fs::write(path, &svg)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scene".to_string());
        self.session.add_scene(name, svg.as_bytes(), Vec::new());
        self.persist_session();
        Ok(format!("Rendered {} object(s) to {}", self.editor.objects().len(), path.display()))
    }
}

/// Convert a backend layout record into an editor snapshot. Objects are
/// taken verbatim; an unparseable timestamp falls back to now, since it
/// is list metadata only.
pub fn snapshot_from_record(record: &SavedLayoutRecord) -> LayoutSnapshot {
    let timestamp = record
        .timestamp
        .as_deref()
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    LayoutSnapshot {
        name: record.name.clone(),
        objects: record.objects.clone(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::PlacedObject;

    fn offline_planner() -> Planner {
        let mut config = AppConfig::default();
        config.session.file = std::env::temp_dir().join("floorset-test-session.json");
        Planner::new(&config, None)
    }

    #[test]
    fn test_add_and_list() {
        let mut planner = offline_planner();
        let msg = planner
            .execute(&Command::Add {
                type_key: "rack".to_string(),
            })
            .unwrap();
        assert!(msg.contains("Clothing Rack 1"));
        let listing = planner.execute(&Command::List).unwrap();
        assert!(listing.contains("rack-1"));
        assert!(listing.starts_with('*'), "new object is selected");
    }

    #[test]
    fn test_unknown_type_reports_without_state_change() {
        let mut planner = offline_planner();
        let msg = planner
            .execute(&Command::Add {
                type_key: "gondola".to_string(),
            })
            .unwrap();
        assert!(msg.contains("gondola"));
        assert!(planner.editor().objects().is_empty());
    }

    #[test]
    fn test_offline_save_keeps_local_state() {
        let mut planner = offline_planner();
        planner
            .execute(&Command::Add {
                type_key: "table".to_string(),
            })
            .unwrap();
        let msg = planner
            .execute(&Command::Save {
                name: "Monday".to_string(),
            })
            .unwrap();
        assert!(msg.contains("Offline"));
        assert_eq!(planner.editor().objects().len(), 1);
    }

    #[test]
    fn test_load_without_cached_layouts() {
        let mut planner = offline_planner();
        let msg = planner.execute(&Command::Load { index: 1 }).unwrap();
        assert!(msg.contains("No layout 1"));
    }

    #[test]
    fn test_backend_commands_degrade_offline() {
        let mut planner = offline_planner();
        for command in [
            Command::Stock,
            Command::Dashboard,
            Command::Team,
            Command::Tasks { member: None },
            Command::Tasks {
                member: Some("sarah".to_string()),
            },
            Command::Insight {
                product_code: "TSH-WHT-001".to_string(),
                time_period: "12weeks".to_string(),
            },
        ] {
            let msg = planner.execute(&command).unwrap();
            assert!(msg.contains("Offline"), "{:?}: {}", command, msg);
        }
    }

    #[test]
    fn test_task_commands_require_cached_list() {
        let mut planner = offline_planner();
        let msg = planner
            .execute(&Command::Assign {
                index: 1,
                member: "sarah".to_string(),
            })
            .unwrap();
        assert!(msg.contains("No task 1"));
        let msg = planner.execute(&Command::Plan { index: 1 }).unwrap();
        assert!(msg.contains("No task 1"));
        let msg = planner
            .execute(&Command::Status {
                index: 1,
                status: "completed".to_string(),
            })
            .unwrap();
        assert!(msg.contains("No task 1"));
    }

    #[test]
    fn test_newtask_validates_priority_before_network() {
        let mut planner = offline_planner();
        let msg = planner
            .execute(&Command::NewTask {
                action: "Move rack to entrance".to_string(),
                reason: "High traffic".to_string(),
                priority: "urgent".to_string(),
            })
            .unwrap();
        assert!(msg.contains("Unknown priority 'urgent'"));

        let msg = planner
            .execute(&Command::NewTask {
                action: "Move rack to entrance".to_string(),
                reason: "High traffic".to_string(),
                priority: "high".to_string(),
            })
            .unwrap();
        assert!(msg.contains("Offline"));
    }

    #[test]
    fn test_status_validates_tag() {
        let mut planner = offline_planner();
        let msg = planner
            .execute(&Command::Status {
                index: 1,
                status: "done".to_string(),
            })
            .unwrap();
        assert!(msg.contains("Unknown status 'done'"));
    }

    #[test]
    fn test_snapshot_from_record_tolerates_bad_timestamp() {
        let record = SavedLayoutRecord {
            id: None,
            name: "Legacy".to_string(),
            timestamp: Some("not-a-date".to_string()),
            objects: vec![PlacedObject::new(
                ObjectId::from("rack-1"),
                "Clothing Rack 1".to_string(),
                "rack".to_string(),
                0,
                0,
            )],
        };
        let snapshot = snapshot_from_record(&record);
        assert_eq!(snapshot.objects.len(), 1);
    }
}
