// End-to-end wizard tests
//
// A real summary service is bound to an ephemeral localhost port and the
// wizard controller talks to it through HttpSummaryClient.

use std::net::SocketAddr;
use std::time::Duration;

use sparkup::brand::{FormField, FormPatch};
use sparkup::cli::{run_generate, GenerateArgs};
use sparkup::client::HttpSummaryClient;
use sparkup::server::BrandServer;
use sparkup::wizard::{WizardController, WizardError, WizardStep};

/// Spawn the service on 127.0.0.1:0 and return its address.
async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, BrandServer::app()).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> HttpSummaryClient {
    HttpSummaryClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

/// Address with nothing listening on it
fn dead_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn fill(wizard: &mut WizardController, values: [&str; 4]) {
    for (field, value) in FormField::ALL.into_iter().zip(values) {
        wizard
            .update_field(FormPatch::single(field, value))
            .unwrap();
        wizard.advance();
    }
}

#[tokio::test]
async fn test_sparkup_end_to_end() {
    let addr = spawn_server().await;
    let client = client_for(addr);
    let mut wizard = WizardController::new();

    fill(&mut wizard, ["Sparkup", "startups", "red", "bold"]);
    assert_eq!(wizard.step(), WizardStep::Tone);

    let summary = wizard.generate(&client).await.unwrap();

    for value in ["Sparkup", "startups", "red", "bold"] {
        assert!(summary.as_str().contains(value), "missing {value}");
    }
    assert_eq!(wizard.step(), WizardStep::Result);

    wizard.reset().unwrap();
    assert_eq!(wizard.step(), WizardStep::BusinessName);
    assert!(wizard.form().is_empty());
}

#[tokio::test]
async fn test_unreachable_service_fails_then_retry_succeeds() {
    let mut wizard = WizardController::new();
    fill(&mut wizard, ["Acme", "devs", "blue", "fun"]);

    let err = wizard.generate(&client_for(dead_addr())).await.unwrap_err();
    assert!(matches!(err, WizardError::Network(_)), "{err:?}");
    assert!(err.is_retryable());
    assert_eq!(wizard.step(), WizardStep::GenerateFailed);
    assert!(wizard.summary().is_none());

    let addr = spawn_server().await;
    let summary = wizard.generate(&client_for(addr)).await.unwrap();
    assert!(summary.as_str().contains("Acme"));
    assert_eq!(wizard.step(), WizardStep::Result);
}

#[tokio::test]
async fn test_generate_command_against_live_service() {
    let addr = spawn_server().await;
    let args = GenerateArgs {
        business_name: Some("Sparkup".into()),
        audience: Some("startups".into()),
        color: Some("red".into()),
        tone: Some("bold".into()),
        server_url: None,
    };

    let summary = run_generate(&args, &client_for(addr)).await.unwrap();

    assert!(summary
        .as_str()
        .contains("Sparkup is a brand created for startups"));
}
