use std::time::SystemTime;

fn main() {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap();

    // Stamp the hook binary itself so `status` can report which build of the
    // hook produced an artifact. Distinct from the BUILD_ID definition the
    // hook emits into downstream firmware.
    let stamp = format!("{:x}.{:x}", now.as_secs(), now.subsec_micros());

    println!("cargo:rustc-env=BUILD_UUID={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
