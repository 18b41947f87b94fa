use nova::{Cloud, CloudError};

fn main() -> Result<(), CloudError> {
    env_logger::init();

    Cloud::new()
        .with_title("nova - point sprite cloud")
        .run()
}
