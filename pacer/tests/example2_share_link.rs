// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end scenario: importing a workspace invite link.
//!
//! A desktop client receives an invite URL, extracts the workspace settings
//! from it, persists them, and keeps the join token on disk encrypted with
//! a key derived from the caller's session.

use pacer::{
    decrypt, derive_key, encrypt, extension, get_cookie, join_paths, parse_query_params,
    read_file_bytes, uuid, write_file, JsonStore, PacerError,
};
use std::path::Path;

#[tokio::test]
async fn test_share_link_import_round_trip() -> anyhow::Result<()> {
    // Arrange: the invite as it arrives from the outside world
    let link = "https://pacer.dev/join?workspace=demo+team&token=s3cr3t%2Ftoken";
    let cookies = "consent=yes; session=alice%40example.com";

    // Act: extract the pieces
    let params = parse_query_params(link);
    let workspace = params.get("workspace").expect("workspace param").clone();
    let token = params.get("token").expect("token param").clone();
    let session = get_cookie(cookies, "session").expect("session cookie");

    // Persist the settings, one key per value
    let dir = tempfile::tempdir()?;
    let store = JsonStore::open(dir.path().join("store"))?;
    let device_id = uuid();
    store.set("device-id", &device_id)?;
    store.set("workspace", &workspace)?;

    // Keep the join token on disk, encrypted with a session-derived key
    let backup = join_paths([dir.path(), Path::new("backups"), Path::new("token.enc")]);
    let key = derive_key(&session);
    write_file(&backup, encrypt(token.as_bytes(), &key)?).await?;

    // Assert: everything round-trips
    assert_eq!(workspace, "demo team");
    assert_eq!(session, "alice@example.com");
    assert_eq!(store.get::<String>("workspace")?.as_deref(), Some("demo team"));
    assert_eq!(store.get::<String>("device-id")?, Some(device_id));

    assert_eq!(extension(&backup).as_deref(), Some("enc"));
    let recovered = decrypt(&read_file_bytes(&backup).await?, &key)?;
    assert_eq!(recovered, b"s3cr3t/token");
    Ok(())
}

#[tokio::test]
async fn test_backup_is_unreadable_with_another_session() -> anyhow::Result<()> {
    // Arrange
    let key = derive_key("alice@example.com");
    let other = derive_key("mallory@example.com");
    let payload = encrypt(b"s3cr3t/token", &key)?;

    // Act & Assert: the wrong session either fails the padding check or
    // yields garbage, never the token.
    match decrypt(&payload, &other) {
        Err(err) => assert!(matches!(err, PacerError::Crypto { .. })),
        Ok(recovered) => assert_ne!(recovered, b"s3cr3t/token"),
    }
    Ok(())
}
