use iced::keyboard;
use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, stack, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod assets;
mod config;
mod error;
mod host;
mod state;
mod ui;

use assets::thumbnail::{load_thumbnail, Thumbnail};
use config::Settings;
use error::GalleryError;
use state::catalog::Catalog;
use state::chrome::Chrome;
use state::data::{ImageId, ImageRecord};
use state::grid::GridState;
use state::overlay::{OverlayEvent, OverlayState};

/// Main application state
struct Gallery {
    settings: Settings,
    /// The records on display, fixed at startup
    catalog: Catalog,
    /// Hover and load tracking for the cards
    grid: GridState,
    /// Decoded thumbnails, keyed by record id
    thumbnails: HashMap<ImageId, Handle>,
    /// Selected record and visibility of the detail overlay
    overlay: OverlayState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A background thumbnail decode finished
    ThumbnailLoaded(ImageId, Result<Thumbnail, GalleryError>),
    /// Pointer entered a card
    CardEntered(ImageId),
    /// Pointer left a card
    CardLeft(ImageId),
    /// User clicked a card
    CardClicked(ImageRecord),
    /// Close control, backdrop, content or key input for the overlay
    Overlay(OverlayEvent),
    /// "Open" action on the selected record
    OpenInViewer,
    /// "Download" action on the selected record
    Download,
    /// Download dialog and copy finished
    DownloadFinished(Result<Option<PathBuf>, GalleryError>),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let catalog = load_catalog(&settings);

        tracing::info!(
            "Gallery initialized with {} images from {}",
            catalog.len(),
            settings.asset_root.display()
        );
        if catalog.is_empty() {
            tracing::warn!("Catalog is empty, nothing to show");
        }

        let gallery = Gallery::with_catalog(settings, catalog, Chrome::new());
        let task = gallery.load_thumbnails();
        (gallery, task)
    }

    fn with_catalog(settings: Settings, catalog: Catalog, chrome: Chrome) -> Self {
        Gallery {
            settings,
            catalog,
            grid: GridState::new(),
            thumbnails: HashMap::new(),
            overlay: OverlayState::new(chrome),
        }
    }

    /// One decode per record; each completion is that record's load signal
    fn load_thumbnails(&self) -> Task<Message> {
        let size = self.settings.thumbnail_size;
        Task::batch(self.catalog.records().iter().map(|record| {
            let id = record.id;
            let path = assets::resolve(&self.settings.asset_root, &record.src);
            Task::perform(load_thumbnail(id, path, size), move |result| {
                Message::ThumbnailLoaded(id, result)
            })
        }))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailLoaded(id, Ok(thumbnail)) => {
                if self.grid.mark_loaded(id) {
                    tracing::debug!(
                        "Thumbnail {} ready ({}x{}), {}/{} loaded",
                        thumbnail.id,
                        thumbnail.width,
                        thumbnail.height,
                        self.grid.loaded_count(),
                        self.catalog.len()
                    );
                    self.thumbnails.insert(id, thumbnail.handle);
                }
                Task::none()
            }
            Message::ThumbnailLoaded(id, Err(e)) => {
                // The card keeps its placeholder
                tracing::warn!("Image {} did not load: {}", id, e);
                Task::none()
            }
            Message::CardEntered(id) => {
                self.grid.pointer_enter(id);
                Task::none()
            }
            Message::CardLeft(id) => {
                self.grid.pointer_leave(id);
                Task::none()
            }
            Message::CardClicked(record) => {
                let id = record.id;
                match self.overlay.select(record) {
                    Ok(()) => tracing::debug!(
                        "Overlay showing image {} (lease {})",
                        id,
                        self.overlay.chrome().acquisitions()
                    ),
                    Err(e) => tracing::warn!("Could not show image {}: {}", id, e),
                }
                Task::none()
            }
            Message::Overlay(event) => {
                if let Some(reason) = self.overlay.handle(event) {
                    tracing::debug!(
                        ?reason,
                        releases = self.overlay.chrome().releases(),
                        "Overlay closed"
                    );
                }
                Task::none()
            }
            Message::OpenInViewer => {
                if let Some(record) = self.overlay.selected() {
                    let path = assets::resolve(&self.settings.asset_root, &record.src);
                    if let Err(e) = host::open_in_viewer(&path) {
                        tracing::warn!("{}", e);
                    }
                }
                Task::none()
            }
            Message::Download => {
                let Some(record) = self.overlay.selected() else {
                    return Task::none();
                };
                let source = assets::resolve(&self.settings.asset_root, &record.src);
                let name = host::suggested_filename(&record.title, &self.settings.download_extension);
                Task::perform(host::download(source, name), Message::DownloadFinished)
            }
            Message::DownloadFinished(result) => {
                match result {
                    Ok(Some(path)) => tracing::info!("Saved image to {}", path.display()),
                    Ok(None) => tracing::debug!("Download cancelled"),
                    Err(e) => tracing::warn!("Download failed: {}", e),
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = container(
            column![
                text("지브리 갤러리").size(40).color(ui::style::SLATE_800),
                text("마법과 상상이 가득한 아름다운 세계를 만나보세요")
                    .size(18)
                    .color(ui::style::SLATE_600),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(ui::style::header);

        let cards = self.grid.cards(self.catalog.records());
        let collection = column![
            text("작품 컬렉션").size(26).color(ui::style::SLATE_700),
            text("각 이미지를 클릭하여 자세히 감상해보세요").color(ui::style::SLATE_600),
            ui::grid::view(cards, &self.thumbnails),
        ]
        .spacing(16)
        .padding(48)
        .max_width(1280.0);

        let footer = container(text("© 2024 지브리 갤러리. 모든 권리 보유."))
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(ui::style::footer);

        let page = container(column![
            header,
            scrollable(
                column![
                    container(collection).width(Length::Fill).center_x(Length::Fill),
                    footer,
                ]
                .spacing(32),
            )
            .height(Length::Fill),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(ui::style::page);

        let mut layers: Vec<Element<Message>> = vec![page.into()];
        if self.overlay.chrome().is_scroll_locked() {
            layers.push(ui::overlay::scroll_lock());
        }
        if let Some(overlay) = ui::overlay::view(
            self.overlay.selected(),
            self.overlay.is_visible(),
            &self.settings.asset_root,
        ) {
            layers.push(overlay);
        }

        stack(layers).into()
    }

    /// Listen for key presses only while the overlay holds the key listener
    fn subscription(&self) -> Subscription<Message> {
        match self.overlay.chrome().dismiss_key() {
            Some(_) => keyboard::on_key_press(|key, _modifiers| {
                Some(Message::Overlay(OverlayEvent::Key(key)))
            }),
            None => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// The manifest named in the settings, or the built-in catalog
fn load_catalog(settings: &Settings) -> Catalog {
    let Some(manifest) = &settings.manifest else {
        return Catalog::builtin();
    };

    match Catalog::from_manifest(manifest) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("{}; using the built-in catalog", e);
            Catalog::builtin()
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application("지브리 갤러리", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(Gallery::new)
}
