use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{require_current, OpError};
use crate::core::filters;
use crate::models::{AppData, OutingRequest, Plan, RequestStatus};

/// Send a "go out" request. At most one pending request per recipient.
pub fn send_request(
    data: &mut AppData,
    to_user_id: &str,
    date: NaiveDate,
    activity: &str,
    message: &str,
) -> Result<String, OpError> {
    let from = require_current(data)?.id.clone();
    if to_user_id == from {
        return Err(OpError::SelfTarget);
    }
    if data.user_by_id(to_user_id).is_none() {
        return Err(OpError::UnknownUser(to_user_id.to_string()));
    }
    let already_pending = data.requests.iter().any(|r| {
        r.from_user_id == from && r.to_user_id == to_user_id && r.status == RequestStatus::Pending
    });
    if already_pending {
        return Err(OpError::RequestAlreadyPending);
    }

    let request = OutingRequest {
        id: Uuid::new_v4().to_string(),
        from_user_id: from,
        to_user_id: to_user_id.to_string(),
        date,
        activity: activity.trim().to_string(),
        message: message.trim().to_string(),
        status: RequestStatus::Pending,
        created_at: Utc::now(),
    };
    let id = request.id.clone();
    data.requests.push(request);
    tracing::info!("Outing request {} sent to {}", id, to_user_id);
    Ok(id)
}

/// Accept a request; the agreed outing becomes a plan. Returns the plan id.
pub fn accept_request(data: &mut AppData, request_id: &str) -> Result<String, OpError> {
    let (from, to, date, activity) = {
        let request = data
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| OpError::UnknownRequest(request_id.to_string()))?;
        request.status = RequestStatus::Accepted;
        (
            request.from_user_id.clone(),
            request.to_user_id.clone(),
            request.date,
            request.activity.clone(),
        )
    };

    let plan = Plan {
        id: Uuid::new_v4().to_string(),
        user1_id: from,
        user2_id: to,
        date,
        activity,
        created_at: Utc::now(),
    };
    let plan_id = plan.id.clone();
    data.plans.push(plan);
    tracing::info!("Request {} accepted, plan {} created", request_id, plan_id);
    Ok(plan_id)
}

/// Decline a request; it stays in the document but leaves the inbox.
pub fn decline_request(data: &mut AppData, request_id: &str) -> Result<(), OpError> {
    let request = data
        .requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or_else(|| OpError::UnknownRequest(request_id.to_string()))?;
    request.status = RequestStatus::Declined;
    tracing::info!("Request {} declined", request_id);
    Ok(())
}

/// A plan with the countdown shown next to it
#[derive(Debug, Clone)]
pub struct UpcomingPlan {
    pub plan: Plan,
    pub days_until: i64,
}

/// Everything the notifications view shows
#[derive(Debug, Clone)]
pub struct Notifications {
    pub pending: Vec<OutingRequest>,
    pub upcoming: Vec<UpcomingPlan>,
}

/// Requests waiting on the current user plus upcoming plans, soonest first.
pub fn notifications(data: &AppData, today: NaiveDate) -> Result<Notifications, OpError> {
    let current = require_current(data)?.id.clone();

    let pending = filters::pending_requests_for(data, &current)
        .into_iter()
        .cloned()
        .collect();
    let upcoming = filters::upcoming_plans_for(data, &current, today)
        .into_iter()
        .map(|p| UpcomingPlan {
            days_until: (p.date - today).num_days(),
            plan: p.clone(),
        })
        .collect();

    Ok(Notifications { pending, upcoming })
}
