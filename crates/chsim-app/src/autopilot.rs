use chsim_core::commands::DashboardCommand;
use chsim_core::state::DashboardSnapshot;

/// Neutralize every blip inside the proximity ring.
pub fn autopilot_commands(snapshot: &DashboardSnapshot) -> Vec<DashboardCommand> {
    snapshot
        .radar
        .blips
        .iter()
        .filter(|b| b.proximate)
        .map(|b| DashboardCommand::NeutralizeBlip { blip_id: b.id })
        .collect()
}
