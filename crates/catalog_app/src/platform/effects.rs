use std::sync::mpsc;

use catalog_core::{CatalogPage, Category, Criteria, Effect, Item, Msg, SelectionSink, SortOrder};
use catalog_engine::{
    CatalogRequest, CatalogResponse, EngineEvent, EngineHandle, EventSink, Genre, Movie,
    SortDirection,
};
use catalog_logging::{catalog_info, RequestScope};

use super::app::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
    selection: Box<dyn SelectionSink>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, selection: Box<dyn SelectionSink>) -> Self {
        Self { engine, selection }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog {
                    request_id,
                    criteria,
                } => {
                    let _scope = RequestScope::enter(request_id);
                    if criteria.is_single_item() {
                        catalog_info!("FetchCatalog item {:?}", criteria.item_id);
                    } else {
                        catalog_info!(
                            "FetchCatalog page {:?} search {:?} params {:?}",
                            criteria.page(),
                            criteria.search_term,
                            criteria.params
                        );
                    }
                    self.engine.fetch(request_id, to_request(criteria));
                }
                Effect::SelectItem(item) => {
                    catalog_info!("Selected item {} ({})", item.id, item.title);
                    self.selection.select(item);
                }
            }
        }
    }
}

/// Feeds engine completions into the event loop as core messages.
pub struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<LoopEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Msg(map_event(event)));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogFetched { request_id, result } => match result {
            Ok(CatalogResponse::List {
                items,
                categories,
                total_pages,
            }) => Msg::CatalogLoaded {
                request_id,
                page: CatalogPage {
                    items: items.map(|items| items.into_iter().map(map_movie).collect()),
                    categories: categories.into_iter().map(map_genre).collect(),
                    total_pages,
                },
            },
            Ok(CatalogResponse::Single { item, categories }) => Msg::DetailLoaded {
                request_id,
                item: map_movie(item),
                categories: categories.into_iter().map(map_genre).collect(),
            },
            Err(err) => Msg::FetchFailed {
                request_id,
                message: err.to_string(),
            },
        },
    }
}

pub(crate) fn to_request(criteria: Criteria) -> CatalogRequest {
    CatalogRequest {
        search_term: criteria.search_term,
        sort: criteria.sort.map(|sort| match sort {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }),
        item_id: criteria.item_id,
        extra_params: criteria.params.into_iter().collect(),
    }
}

fn map_movie(movie: Movie) -> Item {
    Item {
        id: movie.id,
        category_ids: movie.category_ids(),
        title: movie.title,
        rating: movie.vote_average,
        release_date: movie.release_date,
        poster_path: movie.poster_path,
        overview: movie.overview,
    }
}

fn map_genre(genre: Genre) -> Category {
    Category {
        id: genre.id,
        label: genre.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use catalog_engine::{ClientSettings, FailureKind, FetchError};

    #[derive(Clone, Default)]
    struct RecordingSelection {
        picked: Arc<Mutex<Vec<Item>>>,
    }

    impl SelectionSink for RecordingSelection {
        fn select(&self, item: Item) {
            self.picked.lock().unwrap().push(item);
        }
    }

    #[test]
    fn runner_hands_selection_to_sink_and_fetch_to_engine() {
        let (tx, rx) = mpsc::channel();
        let settings = ClientSettings {
            base_url: "http://127.0.0.1:9/3/".to_string(),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(2),
            ..ClientSettings::default()
        };
        let engine = EngineHandle::new(settings, Arc::new(MsgSink::new(tx))).unwrap();
        let selection = RecordingSelection::default();
        let runner = EffectRunner::new(engine, Box::new(selection.clone()));

        let matrix = Item {
            id: 603,
            title: "The Matrix".to_string(),
            ..Item::default()
        };
        runner.run(vec![
            Effect::SelectItem(matrix.clone()),
            Effect::FetchCatalog {
                request_id: 7,
                criteria: Criteria::for_item(603),
            },
        ]);

        assert_eq!(*selection.picked.lock().unwrap(), vec![matrix]);
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            LoopEvent::Msg(Msg::FetchFailed { request_id, .. }) => assert_eq!(request_id, 7),
            LoopEvent::Msg(other) => panic!("unexpected msg {other:?}"),
            _ => panic!("unexpected loop event"),
        }
    }

    #[test]
    fn listing_criteria_become_extra_params() {
        let request = to_request(Criteria::for_listing(5, Some("28")));
        assert_eq!(request.search_term, None);
        assert_eq!(request.sort, None);
        assert_eq!(
            request.extra_params,
            vec![
                ("page".to_string(), "5".to_string()),
                ("sort_by".to_string(), "popularity.desc".to_string()),
                ("with_genres".to_string(), "28".to_string()),
            ]
        );
    }

    #[test]
    fn item_criteria_keep_the_id() {
        let request = to_request(Criteria::for_item(603));
        assert_eq!(request.item_id, Some(603));
        assert!(request.extra_params.is_empty());
    }

    #[test]
    fn list_response_maps_to_catalog_loaded() {
        let movie = sample_movie(7, "Se7en", vec![80, 53]);
        let msg = map_event(EngineEvent::CatalogFetched {
            request_id: 4,
            result: Ok(CatalogResponse::List {
                items: Some(vec![movie]),
                categories: vec![Genre {
                    id: 80,
                    name: "Crime".to_string(),
                }],
                total_pages: None,
            }),
        });

        match msg {
            Msg::CatalogLoaded { request_id, page } => {
                assert_eq!(request_id, 4);
                let items = page.items.unwrap();
                assert_eq!(items[0].title, "Se7en");
                assert_eq!(items[0].category_ids, vec![80, 53]);
                assert_eq!(page.categories[0].label, "Crime");
                assert_eq!(page.total_pages, None);
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn failure_maps_to_fetch_failed() {
        let msg = map_event(EngineEvent::CatalogFetched {
            request_id: 2,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::FetchFailed {
                request_id: 2,
                message: "http status 500: 500 Internal Server Error".to_string(),
            }
        );
    }

    fn sample_movie(id: u64, title: &str, genre_ids: Vec<u32>) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            vote_average: Some(8.3),
            release_date: Some("1995-09-22".to_string()),
            genre_ids,
            genres: Vec::new(),
            poster_path: None,
            overview: None,
        }
    }
}
