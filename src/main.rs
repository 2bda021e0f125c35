use {
  pong_rack::{
    drawing::RenderConfig,
    rack::formation::presets
  },
  anyhow::Result
};

const DIRECTORY: &str = "./configs/";

fn main() -> Result<()> {
  env_logger::init();

  let config = RenderConfig::default();
  for formation in presets()? {
    let path = formation.save_with(DIRECTORY, &config)?;
    log::info!("{} -> {}", formation.title(), path.display());
  }
  Ok(())
}
