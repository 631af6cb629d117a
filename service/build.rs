use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let proto_file = "proto/order.proto";
  let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

  tonic_build::configure()
    .build_server(true)
    // The client is used by the end-to-end tests and by anyone embedding the crate.
    .build_client(true)
    // Include file descriptor set for reflection
    .file_descriptor_set_path(out_dir.join("order_descriptor.bin"))
    .compile_protos(&[proto_file], &["proto"])?;

  println!("cargo:rerun-if-changed=proto");
  Ok(())
}
