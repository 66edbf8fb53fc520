use clap::Parser;
use petcare_avatar::{
    app::Application,
    config::AppConfig,
    telemetry::{build_telemetry, register_telemetry},
};
use std::sync::LazyLock;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_avatar(&self, name: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(format!("{}/avatars/{}", &self.address, name))
            .query(query)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get_descriptor(&self, name: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(format!("{}/avatars/{}/descriptor", &self.address, name))
            .query(query)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn resolve_avatar(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(format!("{}/avatars", &self.address))
            .query(query)
            .send()
            .await
            .expect("failed to execute request")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customize: impl FnOnce(&mut AppConfig)) -> TestApp {
    LazyLock::force(&TELEMETRY);

    // Randomise configuration to ensure test isolation
    let app_config = {
        let mut c = AppConfig::parse_from(["petcare-avatar"]);

        // Use a random OS port
        c.app_application_host = "127.0.0.1".to_string();
        c.app_application_port = 0;

        customize(&mut c);
        c
    };

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let app = Application::build(app_config).await.unwrap();

    let test_app = TestApp {
        address: format!("http://127.0.0.1:{}", &app.port),
        port: app.port,
        api_client,
    };

    _ = tokio::spawn(app.run_until_stopped());

    test_app
}
