//! Scripted improv show, played to the final curtain.

use anyhow::Result;
use duet_application::{build_improv_host, improv_toolset};
use duet_core::config::AppConfig;
use serde_json::json;

const PERFORMANCES: [&str; 4] = [
    "I grab the nearest trench coat and declare myself head of security.",
    "I slowly realize my coffee cup has been empty the whole time.",
    "I negotiate with the seagull as if it were my landlord.",
    "I take a bow before the scene even starts, confidence is key.",
];

pub async fn run(config: &AppConfig, player: &str) -> Result<()> {
    let tools = improv_toolset(build_improv_host(config));

    let greeting = tools.dispatch("set_player", json!({"name": player})).await?;
    println!("Player: {}", greeting["player"].as_str().unwrap_or(player));

    for performance in PERFORMANCES {
        let scene = tools.dispatch("next_scene", json!({})).await?;
        if scene["ok"] != true {
            println!("Host: {}", scene["message"].as_str().unwrap_or_default());
            break;
        }
        println!(
            "\n[Round {}] {}: {}",
            scene["round"],
            scene["scenario"]["title"].as_str().unwrap_or_default(),
            scene["scenario"]["scenario"].as_str().unwrap_or_default()
        );
        println!("{}: {}", player, performance);

        let result = tools
            .dispatch("complete_improv", json!({"player_text": performance}))
            .await?;
        println!(
            "Host ({}): {}",
            result["tone"].as_str().unwrap_or_default(),
            result["reaction"].as_str().unwrap_or_default()
        );

        if result["status"] == "finished" {
            println!("\n{}", result["summary"].as_str().unwrap_or_default());
        }
    }

    let status = tools.dispatch("session_status", json!({})).await?;
    println!("\n=== Session status ===");
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
