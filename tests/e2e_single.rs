
use std::ffi::OsStr;
use std::fs;
use std::net::TcpListener;

use tempfile::tempdir;

use support_single::{run_loadpulse, spawn_http_server};

fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/health", addr))
}

fn describe(output: &std::process::Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_single_cli_basic() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;

    let output = run_loadpulse([
        "-u", url.as_str(), "-c", "2", "-i", "100", "-t", "1", "--timeout", "1000",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Load test completed") {
        return Err(format!("Missing completion notice\n{}", describe(&output)));
    }
    if !stdout.contains("Status: 200, Data: ok") {
        return Err(format!("Missing outcome lines\n{}", describe(&output)));
    }
    let hits = server.hits();
    if !(2..=24).contains(&hits) {
        return Err(format!("Unexpected request count: {}", hits));
    }
    Ok(())
}

#[test]
fn e2e_single_rejects_invalid_concurrency() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;

    let output = run_loadpulse(["-u", url.as_str(), "-c", "0", "-t", "1"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    let combined = describe(&output);
    if !combined.contains("concurrency_per_tick") {
        return Err(format!("Missing validation message\n{}", combined));
    }
    if server.hits() != 0 {
        return Err("Invalid config must not send requests".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_single_rejects_missing_targets() -> Result<(), String> {
    let output = run_loadpulse(["-t", "1"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !describe(&output).contains("target_urls") {
        return Err(format!("Missing validation message\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_single_config_file() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("loadpulse.toml");
    let content = format!(
        "urls = [\"{}\"]\nconcurrency = 1\ninterval_ms = 100\nduration = 1\ntimeout_ms = 1000\n",
        url
    );
    fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let output = run_loadpulse([OsStr::new("--config"), path.as_os_str()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if server.hits() == 0 {
        return Err(format!("Expected requests from config\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_single_unreachable_target_runs_to_completion() -> Result<(), String> {
    let url = closed_port_url()?;

    let output = run_loadpulse([
        "-u", url.as_str(), "-c", "1", "-i", "200", "-t", "1", "--timeout", "200",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Error:") {
        return Err(format!("Expected logged request errors\n{}", describe(&output)));
    }
    if !stdout.contains("Load test completed") {
        return Err(format!("Missing completion notice\n{}", describe(&output)));
    }
    Ok(())
}
