// Serverless entry point: each invocation runs one check

use job_monitor_core::{
    kernel::MonitorDeps,
    server::{handle_invocation, init_tracing, InvocationResponse},
    Config,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Built once per cold start and reused by warm invocations
    let config = Config::from_env()?;
    let deps = MonitorDeps::from_config(&config)?;

    let config = &config;
    let deps = &deps;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let response: InvocationResponse = handle_invocation(config, deps, &event.payload).await;
        Ok::<_, Error>(response)
    }))
    .await
}
