//! Prints the full capability report of the reference snapshot.

use oclhal::prelude::*;
use oclhal::report;
use snapshot_backend::SnapshotApi;

fn main() -> ClResult<()> {
    env_logger::init();

    let api = SnapshotApi::reference();
    for (number, platform) in api.platforms()?.into_iter().enumerate() {
        println!("Platform {}:", number);
        print!("{}", report::platform_report(&api, platform));

        for (number, device) in api
            .devices(platform, DeviceType::ALL)?
            .into_iter()
            .enumerate()
        {
            println!("\nDevice {}:", number);
            print!("{}", report::device_report(&api, device));
        }
    }

    print!("{}", report::supported_image_format_report(&api));
    Ok(())
}
