fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = gable::default()?;
    app.run()
}
