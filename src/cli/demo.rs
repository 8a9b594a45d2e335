//! Demo command - walks a team through its lifecycle against an
//! in-memory registry and prints each result code

use clap::Args;

use crate::config::AppConfig;
use crate::domain::team::{result_code, CreateTeamRequest, PlayerId, TeamRegistry};
use crate::infrastructure::team::InMemoryTeamRegistry;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Leader of the demo team
    #[arg(long, default_value_t = 1)]
    pub leader: u64,

    /// Initial members besides the leader
    #[arg(long, value_delimiter = ',', default_values_t = [2u64, 3, 4])]
    pub members: Vec<u64>,

    /// Team capacity
    #[arg(long, default_value_t = 5)]
    pub capacity: usize,
}

pub fn run(config: &AppConfig, args: DemoArgs) -> anyhow::Result<()> {
    let registry = InMemoryTeamRegistry::new(config.registry.limits());
    let leader = PlayerId::new(args.leader);
    let members: Vec<PlayerId> = args.members.iter().copied().map(PlayerId::new).collect();

    let created = registry.create_team(CreateTeamRequest::new(leader, members).with_capacity(args.capacity));
    println!("Create team result: {}", result_code(&created));

    let team_id = created?;
    println!("Team count: {}", registry.team_count());
    println!("Last team id: {}", registry.last_team_id());
    println!("Members: {}", registry.member_count(team_id));

    let newcomer = newcomer(args.leader, &args.members);
    println!(
        "Join {} result: {}",
        newcomer,
        result_code(&registry.join_team(team_id, newcomer))
    );
    println!(
        "Join {} result: {}",
        newcomer,
        result_code(&registry.join_team(team_id, newcomer))
    );

    println!("Leader leaves: {}", result_code(&registry.leave_team(leader)));
    println!("New leader: {}", registry.leader_of_team(team_id));

    let leader = registry.leader_of_team(team_id);
    println!("Disband result: {}", result_code(&registry.disband(team_id, leader)));
    println!("Players tracked: {}", registry.player_count());

    Ok(())
}

/// Lowest valid player id not already on the demo team
fn newcomer(leader: u64, members: &[u64]) -> PlayerId {
    (1..=u64::MAX)
        .find(|id| *id != leader && !members.contains(id))
        .map_or(PlayerId::INVALID, PlayerId::new)
}
