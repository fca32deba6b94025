fn main() {
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            unsafe {
                std::env::set_var("PROTOC", protoc);
            }
        }
    }

    println!("cargo:rerun-if-changed=proto/identity_verification.proto");
    println!("cargo:rerun-if-changed=proto/notification_delivery.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/identity_verification.proto"], &["proto"])
        .expect("failed to compile identity verification proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/notification_delivery.proto"], &["proto"])
        .expect("failed to compile notification delivery proto");
}
