// Generates the gRPC client and server stubs for the album backend.
//
// The message types live in `src/proto/mod.rs` as hand-declared prost structs, so the
// service is described in Rust here and no `protoc` is needed at build time.

fn main() {
    let album_service = tonic_build::manual::Service::builder()
        .name("AlbumService")
        .package("albums")
        .method(
            tonic_build::manual::Method::builder()
                .name("get_album")
                .route_name("GetAlbum")
                .input_type("crate::proto::AlbumRequest")
                .output_type("crate::proto::ListOfAlbums")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[album_service]);
}
