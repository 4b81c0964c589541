use crate::utils::error::{PrepError, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

const RELEASE_HOST: &str = "https://github.com/coursier/coursier/releases/download";
const COURSIER_VERSION: &str = "v2.0.5";

pub fn scala_install_dir(root: &Path) -> PathBuf {
    root.join("scala")
}

pub fn ivy_cache_dir(root: &Path) -> PathBuf {
    root.join("ivycache")
}

pub fn coursier_bin(install_dir: &Path) -> PathBuf {
    install_dir.join("coursier")
}

struct Artifact {
    name: &'static str,
    sha256: &'static str,
}

// Native launchers exist for 64-bit macOS and Linux; everything else gets
// the JVM launcher jar.
fn platform_artifact() -> Artifact {
    if cfg!(all(target_os = "macos", target_arch = "x86_64")) {
        Artifact {
            name: "cs-x86_64-apple-darwin",
            sha256: "89a2ed25a42073c5d9425623fec7b09b1edbcdf7c2fdf8080d0dffcf0e85297a",
        }
    } else if cfg!(all(target_os = "linux", target_arch = "x86_64")) {
        Artifact {
            name: "cs-x86_64-pc-linux",
            sha256: "d29ed1d8b5694b2e9f8138a57a7b7236b076640ad7cab8c35a9e419bb5ac4c2b",
        }
    } else {
        Artifact {
            name: "coursier.jar",
            sha256: "59e5574d3ecd58ff8e808448dd2d6fcf02d161ec01b0a6f478f084410507ec41",
        }
    }
}

// Downloads the coursier launcher if it is not already installed, verifying
// its checksum against the pinned release value.
pub async fn install_coursier(install_dir: &Path) -> Result<PathBuf> {
    let binary = coursier_bin(install_dir);
    if binary.is_file() {
        tracing::debug!("coursier already installed at {}", binary.display());
        return Ok(binary);
    }

    fs::create_dir_all(install_dir)?;
    let artifact = platform_artifact();
    let url = Url::parse(&format!(
        "{}/{}/{}",
        RELEASE_HOST, COURSIER_VERSION, artifact.name
    ))?;
    download_and_verify(url, &binary, artifact.sha256).await?;
    Ok(binary)
}

async fn download_and_verify(url: Url, target: &Path, expected_sha256: &str) -> Result<()> {
    tracing::info!("Downloading from {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    fs::write(target, &bytes)?;

    let actual_sha256 = sha256_file(target)?;
    if actual_sha256 != expected_sha256 {
        let _ = fs::remove_file(target);
        return Err(PrepError::ChecksumMismatch {
            path: target.display().to_string(),
            expected: expected_sha256.to_string(),
            actual: actual_sha256,
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(target, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 65536];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
