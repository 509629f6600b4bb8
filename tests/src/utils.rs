use anyhow::Result;
use near_workspaces::{sandbox, Contract};
use std::env;
use std::fs;

pub async fn setup_sandbox() -> Result<near_workspaces::Worker<near_workspaces::network::Sandbox>> {
    let mut last_err = None;
    for attempt in 1..=6 {
        match sandbox().await {
            Ok(worker) => return Ok(worker),
            Err(e) => {
                eprintln!("[setup_sandbox] Attempt {}/6 failed, retrying in 5s: {}", attempt, e);
                last_err = Some(e);
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            }
        }
    }
    Err(anyhow::anyhow!(
        "Failed to set up sandbox after 6 attempts: {:?}",
        last_err
    ))
}

pub async fn deploy_contract(
    worker: &near_workspaces::Worker<near_workspaces::network::Sandbox>,
    wasm_path: &str,
) -> Result<Contract> {
    let wasm = fs::read(wasm_path)?;
    let contract = worker.dev_deploy(&wasm).await?;
    Ok(contract)
}

/// `EDITIONS-ONSOCIAL_WASM_PATH` overrides the `cargo near build` output location.
pub fn get_wasm_path(contract_name: &str) -> String {
    env::var(format!("{}_WASM_PATH", contract_name.to_uppercase())).unwrap_or_else(|_| {
        format!(
            "{}/../target/near/{1}/{1}.wasm",
            env!("CARGO_MANIFEST_DIR"),
            contract_name.replace("-", "_")
        )
    })
}
