// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use dose_certa_model::{HealthPost, ScheduleEntry, VaccinationCampaign};

/// Every vaccine name offered by any post, sorted and de-duplicated.
#[must_use]
pub fn vaccine_catalog(posts: &[HealthPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.available_vaccines.iter().map(|v| v.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Campaigns whose vaccine contains, or is contained in, a schedule vaccine.
#[must_use]
pub fn related_campaigns(
    campaigns: &[VaccinationCampaign],
    schedule: &[ScheduleEntry],
) -> Vec<VaccinationCampaign> {
    let scheduled: Vec<String> = schedule
        .iter()
        .map(|entry| entry.vaccine.to_lowercase())
        .collect();
    campaigns
        .iter()
        .filter(|campaign| {
            let vaccine = campaign.vaccine.to_lowercase();
            scheduled
                .iter()
                .any(|entry| vaccine.contains(entry.as_str()) || entry.contains(vaccine.as_str()))
        })
        .cloned()
        .collect()
}
