// SPDX-License-Identifier: MPL-2.0
use lens_gallery::app::{App, Message, PresentationSurface};
use lens_gallery::application::query::ThumbnailView;
use lens_gallery::config;
use lens_gallery::domain::error::MediaError;
use lens_gallery::domain::media::ThumbnailHandle;
use lens_gallery::domain::ui::ThumbnailEdge;
use lens_gallery::error::{Error, Result};
use lens_gallery::infrastructure::ImageCrateDecoder;
use lens_gallery::media::ingest::DroppedFile;
use lens_gallery::ui::viewer::{Effect, Message as ViewerMessage};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

const HELP: &str = "\
Usage: lens_gallery [--config PATH] [--thumbnails DIR] [--slideshow CYCLES] FILE...

Options:
  --config PATH        Read settings from PATH instead of the user config directory
  --thumbnails DIR     Write the thumbnail strip images into DIR as PNG
  --slideshow CYCLES   Play the slideshow through the gallery CYCLES times
  -h, --help           Print this help
";

struct Flags {
    config: Option<PathBuf>,
    thumbnails: Option<PathBuf>,
    slideshow_cycles: u32,
    files: Vec<PathBuf>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Flags {
        config: args.opt_value_from_str("--config")?,
        thumbnails: args.opt_value_from_str("--thumbnails")?,
        slideshow_cycles: args.opt_value_from_str("--slideshow")?.unwrap_or(0),
        files: args.finish().into_iter().map(PathBuf::from).collect(),
    }))
}

/// Headless surface: logs what a window would render and decides when the
/// run is over.
struct LoggingSurface {
    sender: Option<UnboundedSender<Message>>,
    slideshow_cycles: u32,
    total: usize,
    slideshow_started: bool,
    slides_shown: usize,
    thumbnails: Vec<ThumbnailView>,
}

impl LoggingSurface {
    fn new(slideshow_cycles: u32) -> Self {
        Self {
            sender: None,
            slideshow_cycles,
            total: 0,
            slideshow_started: false,
            slides_shown: 0,
            thumbnails: Vec::new(),
        }
    }

    fn send(&self, message: Message) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(message);
        }
    }

    fn slideshow_target(&self) -> usize {
        self.total * self.slideshow_cycles as usize
    }
}

impl PresentationSurface for LoggingSurface {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ShowRecord {
                index,
                record,
                video,
            } => {
                info!(index, name = %record.display_name, kind = ?record.kind, ?video, "show");
                if self.slideshow_started {
                    self.slides_shown += 1;
                    if self.slides_shown >= self.slideshow_target() {
                        self.send(Message::Shutdown);
                    }
                }
            }
            Effect::ShowEmpty => info!("gallery is empty"),
            Effect::StoreUpdated { thumbnails } => {
                self.total = thumbnails.len();
                self.thumbnails.clone_from(thumbnails);
            }
            Effect::SlideshowChanged { active, label } => info!(active, label, "slideshow"),
            other => debug!(?other, "effect"),
        }
    }

    fn report_failures(&mut self, failures: &[MediaError]) {
        for failure in failures {
            warn!(%failure, "skipped");
        }
    }

    fn batch_settled(&mut self) {
        if self.slideshow_cycles == 0 || self.total < 2 {
            self.send(Message::Shutdown);
        } else if !self.slideshow_started {
            self.slideshow_started = true;
            self.send(ViewerMessage::PlayPauseClicked.into());
        }
    }
}

fn read_files(paths: &[PathBuf]) -> Vec<DroppedFile> {
    paths
        .iter()
        .filter_map(|path| match DroppedFile::from_path(path) {
            Ok(file) => Some(file),
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot read file");
                None
            }
        })
        .collect()
}

/// Output file for a strip entry; the record id keeps equal names apart.
fn thumbnail_path(dir: &Path, view: &ThumbnailView) -> PathBuf {
    dir.join(format!("{:03}-{}.png", view.id.0, view.name))
}

/// Writes the strip images. Videos use their generated poster; images are
/// scaled down from their source.
fn write_thumbnails(dir: &Path, thumbnails: &[ThumbnailView], edge: ThumbnailEdge) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for view in thumbnails {
        let Some(handle) = &view.thumbnail else {
            continue;
        };
        let path = thumbnail_path(dir, view);
        match handle {
            ThumbnailHandle::Png(bytes) => std::fs::write(&path, bytes)?,
            ThumbnailHandle::Source => image_rs::load_from_memory(view.source.bytes())
                .and_then(|image| image.thumbnail(edge.value(), edge.value()).save(&path))
                .map_err(|err| {
                    Error::Media(MediaError::ThumbnailGenerationFailure {
                        name: view.name.clone(),
                        reason: err.to_string(),
                    })
                })?,
        }
        info!(path = %path.display(), "wrote thumbnail");
    }
    Ok(())
}

fn run(flags: Flags) -> Result<()> {
    let config = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_default(),
    };
    let settings = config.resolve();

    let files = read_files(&flags.files);
    if files.is_empty() {
        return Err(Error::Io("no readable files given".to_string()));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let local = tokio::task::LocalSet::new();
    let surface = local.block_on(&runtime, async {
        let mut app = App::new(
            &settings,
            ImageCrateDecoder::new(),
            LoggingSurface::new(flags.slideshow_cycles),
        );
        let sender = app.sender();
        app.surface_mut().sender = Some(sender.clone());
        let _ = sender.send(Message::FilesDropped(files));
        app.run().await
    });

    if let Some(dir) = &flags.thumbnails {
        write_thumbnails(dir, &surface.thumbnails, settings.thumbnail_edge)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lens_gallery=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(flags) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, RgbaImage};
    use lens_gallery::domain::media::{MediaKind, MediaSource, RecordId};
    use std::io::Cursor;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn view(id: u64, name: &str, source: &[u8], thumbnail: ThumbnailHandle) -> ThumbnailView {
        ThumbnailView {
            id: RecordId(id),
            name: name.to_string(),
            kind: MediaKind::Image,
            thumbnail: Some(thumbnail),
            source: MediaSource::new(Arc::from(source), "image/png"),
            active: false,
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        RgbaImage::new(width, height)
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode");
        bytes.into_inner()
    }

    #[test]
    fn equal_names_write_separate_files() {
        let dir = tempdir().expect("tempdir");
        let thumbnails = [
            view(0, "clip.mp4", b"", ThumbnailHandle::Png(Arc::from(&b"first"[..]))),
            view(1, "clip.mp4", b"", ThumbnailHandle::Png(Arc::from(&b"second"[..]))),
        ];

        write_thumbnails(dir.path(), &thumbnails, ThumbnailEdge::default()).expect("written");

        assert_eq!(std::fs::read(dir.path().join("000-clip.mp4.png")).expect("first"), b"first");
        assert_eq!(std::fs::read(dir.path().join("001-clip.mp4.png")).expect("second"), b"second");
    }

    #[test]
    fn image_entries_are_fitted_from_their_own_source() {
        let dir = tempdir().expect("tempdir");
        let edge = ThumbnailEdge::default();
        let thumbnails = [
            view(3, "a.png", &png(400, 200), ThumbnailHandle::Source),
            view(4, "a.png", &png(20, 40), ThumbnailHandle::Source),
        ];

        write_thumbnails(dir.path(), &thumbnails, edge).expect("written");

        let large = image_rs::open(thumbnail_path(dir.path(), &thumbnails[0])).expect("large");
        let small = image_rs::open(thumbnail_path(dir.path(), &thumbnails[1])).expect("small");
        assert_eq!((large.width(), large.height()), (edge.value(), edge.value() / 2));
        assert_eq!((small.width(), small.height()), (edge.value() / 2, edge.value()));
    }
}
