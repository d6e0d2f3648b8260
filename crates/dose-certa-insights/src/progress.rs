// SPDX-License-Identifier: Apache-2.0

use dose_certa_model::{CampaignTarget, VaccinationCampaign};
use serde::Serialize;

/// `round(current / target * 100)`, rounding halves up. A zero target yields 0.
#[must_use]
pub fn percentage(current: u64, target: u64) -> u64 {
    if target == 0 {
        return 0;
    }
    let current = u128::from(current);
    let target = u128::from(target);
    let rounded = (current * 200 + target) / (target * 2);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Same as [`percentage`], clamped to 100 for progress bars.
#[must_use]
pub fn capped_percentage(current: u64, target: u64) -> u64 {
    percentage(current, target).min(100)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProgress {
    pub id: String,
    pub title: String,
    pub current: u64,
    pub target: u64,
    pub percentage: u64,
}

#[must_use]
pub fn campaign_progress(campaign: &VaccinationCampaign) -> CampaignProgress {
    CampaignProgress {
        id: campaign.id.to_string(),
        title: campaign.title.clone(),
        current: campaign.current_coverage,
        target: campaign.estimated_coverage,
        percentage: percentage(campaign.current_coverage, campaign.estimated_coverage),
    }
}

#[must_use]
pub fn target_progress(target: &CampaignTarget) -> CampaignProgress {
    CampaignProgress {
        id: target.id.to_string(),
        title: target.name.clone(),
        current: target.completed,
        target: target.target,
        percentage: percentage(target.completed, target.target),
    }
}
