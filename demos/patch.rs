//! Applying a partial update to a record.
//!
//! A field that is absent from the patch keeps its value, a field that is
//! set to null is cleared and a field with a value is replaced.

use log::info;
use maybe_value::{DecodeError, MayBeValue};

#[allow(dead_code)]
#[derive(Debug)]
struct Profile {
    name: String,
    nickname: Option<String>,
    age: Option<u8>,
}

#[derive(Debug, Default)]
struct ProfilePatch {
    nickname: MayBeValue<String>,
    age: MayBeValue<u8>,
}

impl ProfilePatch {
    fn apply(self, profile: &mut Profile) {
        let old = std::mem::take(&mut profile.nickname);
        profile.nickname = self.nickname.unwrap_or(old);
        profile.age = self.age.unwrap_or(profile.age);
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.nickname.encode_to(&mut out);
        self.age.encode_to(&mut out);
        out
    }

    fn decode(mut buf: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            nickname: MayBeValue::decode(&mut buf)?,
            age: MayBeValue::decode(&mut buf)?,
        })
    }
}

fn main() -> Result<(), DecodeError> {
    env_logger::init();

    let mut profile = Profile {
        name: "Ada".into(),
        nickname: Some("countess".into()),
        age: None,
    };

    let patches = [
        ProfilePatch {
            age: MayBeValue::value(36),
            ..Default::default()
        },
        ProfilePatch {
            nickname: MayBeValue::null(),
            ..Default::default()
        },
        ProfilePatch::default(),
    ];

    for patch in patches {
        println!("nickname: {}, age: {}", patch.nickname, patch.age);

        // Send the patch through its binary form to show that absent and
        // null fields survive the trip.
        let bytes = patch.encode();
        info!("patch encoded to {} bytes", bytes.len());
        let patch = ProfilePatch::decode(&bytes)?;

        patch.apply(&mut profile);
        println!("  -> {profile:?}");
    }

    Ok(())
}
