//! Dataset cache: each file is fetched at most once into a data directory.
//!
//! [`ensure_dataset`] looks for `<dir>/<file_name>`, then for a `.gz` sibling
//! to decompress, and only then goes to the network. Without the `download`
//! feature the network step reports [`CatalogError::Download`].

use crate::errors::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the local path of a dataset, fetching it on first use.
pub fn ensure_dataset(dir: &Path, file_name: &str, url: &str) -> CatalogResult<PathBuf> {
    let path = dir.join(file_name);
    if path.exists() {
        info!(path = %path.display(), "found cached dataset");
        return Ok(path);
    }

    std::fs::create_dir_all(dir)?;

    let gz_path = dir.join(format!("{}.gz", file_name));
    if gz_path.exists() {
        info!(path = %gz_path.display(), "decompressing cached dataset");
        #[cfg(feature = "download")]
        {
            decompress_gz(&gz_path, &path)?;
            return Ok(path);
        }
        #[cfg(not(feature = "download"))]
        return Err(CatalogError::download(
            url,
            format!("{} is compressed and gzip support is not enabled", gz_path.display()),
        ));
    }

    info!(url, path = %path.display(), "downloading dataset");
    download(url, &path)?;
    Ok(path)
}

#[cfg(not(feature = "download"))]
fn download(url: &str, _dest: &Path) -> CatalogResult<()> {
    Err(CatalogError::download(url, "built without the `download` feature"))
}

#[cfg(feature = "download")]
fn download(url: &str, dest: &Path) -> CatalogResult<()> {
    use std::io::{Read, Write};

    let response = reqwest::blocking::get(url).map_err(|e| CatalogError::download(url, e))?;
    if !response.status().is_success() {
        return Err(CatalogError::download(
            url,
            format!("server returned {}", response.status()),
        ));
    }

    let progress = match response.content_length() {
        Some(len) => indicatif::ProgressBar::new(len),
        None => indicatif::ProgressBar::new_spinner(),
    };
    progress.set_style(
        indicatif::ProgressStyle::with_template(
            "{spinner} {msg} [{bar:40}] {bytes}/{total_bytes} ({bytes_per_sec})",
        )
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
        .progress_chars("=> "),
    );
    progress.set_message(dest.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default());

    let compressed = url.ends_with(".gz");
    let mut body = progress.wrap_read(response);

    let written = write_via_partial(dest, |file| {
        if compressed {
            let mut decoder = flate2::read::GzDecoder::new(body);
            return std::io::copy(&mut decoder, file).map_err(|e| CatalogError::download(url, e));
        }
        let mut buf = vec![0u8; 256 * 1024];
        let mut total = 0u64;
        loop {
            let n = body.read(&mut buf).map_err(|e| CatalogError::download(url, e))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            total += n as u64;
        }
        Ok(total)
    })?;
    progress.finish_and_clear();

    info!(
        path = %dest.display(),
        size_mb = written as f64 / 1_048_576.0,
        "dataset saved"
    );
    Ok(())
}

#[cfg(feature = "download")]
fn decompress_gz(gz_path: &Path, dest: &Path) -> CatalogResult<()> {
    use std::io::BufReader;

    let gz_file = std::fs::File::open(gz_path)?;
    let mut decoder = flate2::read::GzDecoder::new(BufReader::new(gz_file));
    write_via_partial(dest, |file| Ok(std::io::copy(&mut decoder, file)?))?;
    Ok(())
}

/// Writes `dest` through a `.part` sibling that is renamed only once `fill`
/// succeeds, so an interrupted write never looks like a cached dataset.
#[cfg(feature = "download")]
fn write_via_partial<F>(dest: &Path, fill: F) -> CatalogResult<u64>
where
    F: FnOnce(&mut std::fs::File) -> CatalogResult<u64>,
{
    use std::io::Write;

    let partial = dest.with_extension("part");
    let result = std::fs::File::create(&partial)
        .map_err(CatalogError::from)
        .and_then(|mut file| {
            let written = fill(&mut file)?;
            file.flush()?;
            Ok(written)
        });

    match result {
        Ok(written) => {
            std::fs::rename(&partial, dest)?;
            Ok(written)
        }
        Err(e) => {
            let _ = std::fs::remove_file(&partial);
            Err(e)
        }
    }
}
