use {
    barcode::QrDecoder,
    scouting_importer::{CAMERA_ENV, DisplayShell, LOG_DIR_ENV, ShellConfig, camera_config_from},
    std::{env, path::PathBuf},
    video::V4l2Camera,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::var_os(LOG_DIR_ENV) {
        Some(dir) => base::init_file_logger(PathBuf::from(dir))?,
        None => base::init_stdout_logger(),
    }

    log::info!("Scouting Importer");
    let camera = V4l2Camera::new(camera_config_from(env::var_os(CAMERA_ENV).map(PathBuf::from)));

    let shell = match DisplayShell::new(ShellConfig::default(), camera, QrDecoder::new()) {
        Ok(shell) => shell,
        Err(error) => {
            log::error!("startup failed: {}", error);
            return Err(error.into());
        }
    };
    shell.run()?;

    log::info!("Exiting...");
    Ok(())
}
