use rand::prelude::IndexedRandom;
use turf_war::{
    finalize_rewards, resolve_clothing, resolve_weapon, BattleMode, BattleRegistry, Combatant,
    GameData, MemoryBackend, MoveKind, StoreBackend, TurnRng,
};

fn main() {
    let registry = BattleRegistry::new();
    let backend = MemoryBackend::new();
    let mut rng = rand::rng();

    let vinnie = match build_combatant("vinnie", "Vinnie", 8, "switchblade", "leather_jacket") {
        Ok(combatant) => combatant,
        Err(e) => {
            println!("Error resolving equipment: {}", e);
            return;
        }
    };
    let rocco = match build_combatant("rocco", "Rocco", 6, "baseball_bat", "tailored_suit") {
        Ok(combatant) => combatant,
        Err(e) => {
            println!("Error resolving equipment: {}", e);
            return;
        }
    };

    println!(
        "{} (level {}, {} health) challenges {} (level {}, {} health)!",
        vinnie.display_name,
        vinnie.level,
        vinnie.max_health,
        rocco.display_name,
        rocco.level,
        rocco.max_health
    );

    let key = match registry.start_battle(vinnie, rocco, BattleMode::Friendly, None) {
        Ok(key) => key,
        Err(e) => {
            println!("Could not start battle: {}", e);
            return;
        }
    };

    let moves = MoveKind::all();
    let completed = loop {
        let snapshot = match registry.snapshot(&key) {
            Some(state) => state,
            None => {
                println!("Battle vanished from the registry");
                return;
            }
        };
        let actor_id = snapshot.combatant(snapshot.current_turn).id.clone();
        let kind = *moves
            .choose(&mut rng)
            .expect("the move list is never empty");

        match registry.execute_action(&key, &actor_id, kind, &mut TurnRng::new_random()) {
            Ok((report, completed)) => {
                report.events.print_formatted(&snapshot);
                if let Some(completed) = completed {
                    break completed;
                }
            }
            Err(e) => {
                println!("Action rejected: {}", e);
                return;
            }
        }
    };

    println!();
    let mut data = match backend.load() {
        Ok(data) => data,
        Err(e) => {
            println!("Could not load the ledger: {}", e);
            return;
        }
    };
    let summary = match finalize_rewards(completed, &mut data, None) {
        Ok(summary) => summary,
        Err(e) => {
            println!("Could not settle the battle: {}", e);
            return;
        }
    };
    print_rewards(&summary, &data);

    if let Err(e) = backend.save(&data) {
        println!("Could not save the ledger: {}", e);
    }
}

fn build_combatant(
    id: &str,
    name: &str,
    level: u32,
    weapon: &str,
    clothing: &str,
) -> Result<Combatant, turf_war::EquipmentError> {
    Ok(Combatant::new(
        id,
        name,
        level,
        resolve_weapon(weapon)?,
        resolve_clothing(clothing)?,
    ))
}

fn print_rewards(summary: &turf_war::RewardSummary, data: &GameData) {
    for (id, delta) in &summary.deltas {
        let ledger = data.player(id);
        println!(
            "{} earns {} XP and ${} (now {} XP, ${})",
            id, delta.xp, delta.money, ledger.xp, ledger.dollars
        );
    }
}
