//! End-to-end scenarios over the service layer.

use subway_server::config::Finder;
use subway_server::domain::{ErrorKind, LineId, StationId};
use subway_server::service::{NewLine, SubwayService};

fn new_line(name: &str, up: StationId, down: StationId, distance: i64) -> NewLine {
    NewLine {
        name: name.to_string(),
        color: "grey".to_string(),
        up_station: up,
        down_station: down,
        distance,
    }
}

/// Stations 1..=5, plus:
/// - A: 1 -> 2 (10)
/// - B: 2 -> 4 (10)
/// - C: 1 -> 3 (2), extended with 3 -> 4 (3)
///
/// Station 5 is registered but on no line.
async fn three_line_network() -> SubwayService {
    let service = SubwayService::in_memory(Finder::Dijkstra);
    for name in ["Gyodae", "Gangnam", "Yangjae", "Nambu", "Isolated"] {
        service.create_station(name).await.unwrap();
    }

    service
        .create_line(new_line("A", StationId(1), StationId(2), 10))
        .await
        .unwrap();
    service
        .create_line(new_line("B", StationId(2), StationId(4), 10))
        .await
        .unwrap();
    let c = service
        .create_line(new_line("C", StationId(1), StationId(3), 2))
        .await
        .unwrap();
    service
        .add_section(c.id(), StationId(3), StationId(4), 3)
        .await
        .unwrap();

    service
}

#[tokio::test]
async fn shortest_path_prefers_lower_distance() {
    let service = three_line_network().await;

    let path = service.find_path(StationId(1), StationId(4)).await.unwrap();

    assert_eq!(
        path.station_ids(),
        vec![StationId(1), StationId(3), StationId(4)]
    );
    assert_eq!(path.distance(), 5);

    let names: Vec<_> = path.stations().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Gyodae", "Yangjae", "Nambu"]);
}

#[tokio::test]
async fn unconnected_station_has_no_path() {
    let service = three_line_network().await;
    let err = service
        .find_path(StationId(1), StationId(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathNotFound);
}

#[tokio::test]
async fn unknown_station_is_reported_first() {
    let service = three_line_network().await;
    let err = service
        .find_path(StationId(99), StationId(1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StationNotFound);
}

#[tokio::test]
async fn same_source_and_target() {
    let service = three_line_network().await;
    for id in 1..=5 {
        let err = service
            .find_path(StationId(id), StationId(id))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathDuplicateStation);
    }
}

#[tokio::test]
async fn path_follows_topology_changes() {
    let service = three_line_network().await;

    // Dropping 3 -> 4 from line C leaves only the long way round
    service
        .remove_section(LineId(3), StationId(4))
        .await
        .unwrap();
    let path = service.find_path(StationId(1), StationId(4)).await.unwrap();
    assert_eq!(
        path.station_ids(),
        vec![StationId(1), StationId(2), StationId(4)]
    );
    assert_eq!(path.distance(), 20);

    // Line C still covers 1 -> 3
    let path = service.find_path(StationId(1), StationId(3)).await.unwrap();
    assert_eq!(path.distance(), 2);
}

#[tokio::test]
async fn deleted_line_drops_out_of_paths() {
    let service = three_line_network().await;
    service.delete_line(LineId(2)).await.unwrap();

    let path = service.find_path(StationId(1), StationId(4)).await.unwrap();
    assert_eq!(path.distance(), 5);

    let err = service
        .find_path(StationId(2), StationId(4))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathNotFound);
}

#[tokio::test]
async fn split_section_changes_route() {
    let service = SubwayService::in_memory(Finder::Dijkstra);
    for name in ["A", "B", "C"] {
        service.create_station(name).await.unwrap();
    }
    let line = service
        .create_line(new_line("L", StationId(1), StationId(2), 10))
        .await
        .unwrap();

    // Split 1 -> 2 (10) into 1 -> 3 (4) and 3 -> 2 (6)
    service
        .add_section(line.id(), StationId(1), StationId(3), 4)
        .await
        .unwrap();

    let stored = service.get_line(line.id()).await.unwrap();
    let ids: Vec<_> = stored
        .topology()
        .stations()
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(ids, vec![StationId(1), StationId(3), StationId(2)]);

    let path = service.find_path(StationId(3), StationId(2)).await.unwrap();
    assert_eq!(path.distance(), 6);
    let path = service.find_path(StationId(1), StationId(2)).await.unwrap();
    assert_eq!(path.distance(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn queries_run_alongside_mutations() {
    let service = three_line_network().await;
    for name in ["X", "Y", "Z"] {
        service.create_station(name).await.unwrap();
    }

    let writer = {
        let service = service.clone();
        tokio::spawn(async move {
            for _ in 0..50 {
                service
                    .add_section(LineId(2), StationId(4), StationId(6), 1)
                    .await
                    .unwrap();
                service
                    .remove_section(LineId(2), StationId(6))
                    .await
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let path = service.find_path(StationId(1), StationId(4)).await.unwrap();
                    assert_eq!(path.distance(), 5);
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    let line = service.get_line(LineId(2)).await.unwrap();
    assert_eq!(line.topology().len(), 1);
}
