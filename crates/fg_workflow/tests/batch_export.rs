// crates/fg_workflow/tests/batch_export.rs

//! 批处理导出测试（内存容器 + 内存输出）

use fg_config::{DatasetKeys, ExportConfig, FailurePolicy, StepWindow};
use fg_foundation::{FgError, FgResult};
use fg_io::{MemoryContainer, MemoryRasterSink, RasterSink, WrittenRaster};
use fg_terrain::{GeoTransform, InterpolatedGrid, SpatialFrame};
use fg_workflow::{
    export_with_container, BatchDriver, CancellationToken, FnListener, ProgressListener,
    SilentListener,
};
use ndarray::{array, Array2};
use std::sync::Mutex;

const WKT: &str = "LOCAL_CS[\"floodplain\"]";

fn frame() -> SpatialFrame {
    SpatialFrame::new(4, 5, GeoTransform::new(0.0, 0.0, 1.0, -1.0), Some(WKT.to_string())).unwrap()
}

fn plane_coords() -> Array2<f64> {
    array![[0.0, 0.0], [5.0, 0.0], [0.0, -4.0], [5.0, -4.0], [2.5, -2.0], [1.0, -3.0]]
}

/// 第 t 步（0 起）的数值为 z = x + y + t
fn plane_values(n_steps: usize) -> Array2<f64> {
    let coords = plane_coords();
    Array2::from_shape_fn((n_steps, coords.nrows()), |(t, i)| {
        coords[[i, 0]] + coords[[i, 1]] + t as f64
    })
}

fn config() -> ExportConfig {
    ExportConfig::new("dem.tif", "plan.p01.hdf")
}

fn container(n_steps: usize) -> MemoryContainer {
    MemoryContainer::new("plan.p01.hdf").with_samples(
        &DatasetKeys::default(),
        plane_coords(),
        plane_values(n_steps),
    )
}

fn collinear_container(n_steps: usize) -> MemoryContainer {
    MemoryContainer::new("plan.p01.hdf").with_samples(
        &DatasetKeys::default(),
        array![[0.0, 0.0], [1.0, -1.0], [2.0, -2.0], [3.0, -3.0]],
        Array2::zeros((n_steps, 4)),
    )
}

fn run(
    config: &ExportConfig,
    container: &MemoryContainer,
    sink: &mut MemoryRasterSink,
) -> FgResult<fg_workflow::BatchReport> {
    export_with_container(
        config,
        &frame(),
        container,
        sink,
        &SilentListener,
        &CancellationToken::new(),
    )
}

#[test]
fn test_plane_statistics_and_georeference() {
    let config = config().with_steps(StepWindow::Range { first: 1, last: 1 });
    let mut sink = MemoryRasterSink::new("out");
    let report = run(&config, &container(3), &mut sink).unwrap();

    let stats = report.written[0].statistics.unwrap();
    assert!((stats.min - (-4.0)).abs() < 1e-6);
    assert!((stats.max - 5.0).abs() < 1e-6);

    let stored = sink.get(1).unwrap();
    assert_eq!(stored.shape, (4, 5));
    assert_eq!(stored.transform.to_gdal(), [0.0, 1.0, 0.0, 0.0, 0.0, -1.0]);
    assert_eq!(stored.projection.as_deref(), Some(WKT));
    assert!(stored.data.iter().all(|v| v.is_finite()));
}

#[test]
fn test_rerun_is_identical() {
    let config = config().with_steps(StepWindow::All);
    let container = container(4);

    let mut first = MemoryRasterSink::new("out");
    let mut second = MemoryRasterSink::new("out");
    let a = run(&config, &container, &mut first).unwrap();
    let b = run(&config, &container, &mut second).unwrap();
    // 同一输出重复运行覆盖原结果
    run(&config, &container, &mut second).unwrap();

    assert_eq!(a.written, b.written);
    assert_eq!(second.len(), 4);
    for step in 1..=4 {
        let x = first.get(step).unwrap();
        let y = second.get(step).unwrap();
        let bits = |d: &[f32]| d.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&x.data), bits(&y.data));
        assert_eq!(x.transform, y.transform);
        assert_eq!(x.statistics, y.statistics);
    }
}

#[test]
fn test_missing_geometry_writes_nothing() {
    let keys = DatasetKeys::default();
    let container = MemoryContainer::new("plan.p01.hdf").with_dataset(keys.values_path(), plane_values(3));
    let mut sink = MemoryRasterSink::new("out");

    assert!(matches!(
        run(&config(), &container, &mut sink),
        Err(FgError::DataNotFound { .. })
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_window_beyond_available_is_rejected() {
    let mut sink = MemoryRasterSink::new("out");

    // 默认窗口为最后 5 步，只有 3 步可用
    assert!(matches!(
        run(&config(), &container(3), &mut sink),
        Err(FgError::StepOutOfRange { available: 3, .. })
    ));

    let config = config().with_steps(StepWindow::Range { first: 2, last: 4 });
    assert!(matches!(
        run(&config, &container(3), &mut sink),
        Err(FgError::StepOutOfRange { first: 2, last: 4, available: 3 })
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_degenerate_samples_skip_and_warn() {
    let config = config().with_steps(StepWindow::Last { count: 2 });
    let mut sink = MemoryRasterSink::new("out");

    let report = run(&config, &collinear_container(4), &mut sink).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(
        report.skipped.iter().map(|s| s.step).collect::<Vec<_>>(),
        vec![3, 4]
    );
    assert!(!report.is_complete());
    assert!(sink.is_empty());
}

#[test]
fn test_degenerate_samples_abort() {
    let config = config()
        .with_steps(StepWindow::Last { count: 2 })
        .with_failure_policy(FailurePolicy::Abort);
    let mut sink = MemoryRasterSink::new("out");

    assert!(matches!(
        run(&config, &collinear_container(4), &mut sink),
        Err(FgError::InterpolationFailed { step: 3, .. })
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_progress_reports_step_and_series_total() {
    let config = config().with_steps(StepWindow::Last { count: 3 });
    let calls = Mutex::new(Vec::new());
    let listener = FnListener::new(|i, n| calls.lock().unwrap().push((i, n)));
    let mut sink = MemoryRasterSink::new("out");

    export_with_container(
        &config,
        &frame(),
        &container(6),
        &mut sink,
        &listener,
        &CancellationToken::new(),
    )
    .unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![(4, 6), (5, 6), (6, 6)]);
}

/// 写出第二步后请求取消
struct CancelAfterSecond {
    token: CancellationToken,
    seen: Mutex<usize>,
}

impl ProgressListener for CancelAfterSecond {
    fn on_step_complete(&self, _current_index: usize, _total_steps: usize) {
        let mut seen = self.seen.lock().unwrap();
        *seen += 1;
        if *seen == 2 {
            self.token.cancel();
        }
    }
}

#[test]
fn test_cancellation_between_steps() {
    let token = CancellationToken::new();
    let listener = CancelAfterSecond {
        token: token.clone(),
        seen: Mutex::new(0),
    };
    let config = config().with_steps(StepWindow::All);
    let mut sink = MemoryRasterSink::new("out");

    let report = export_with_container(&config, &frame(), &container(5), &mut sink, &listener, &token)
        .unwrap();

    assert!(report.cancelled);
    assert_eq!(report.written_steps(), vec![1, 2]);
    assert_eq!(sink.steps(), vec![1, 2]);
}

/// 第二次写出失败的输出
struct FailingSink {
    inner: MemoryRasterSink,
    writes: usize,
}

impl RasterSink for FailingSink {
    fn write(&mut self, grid: &InterpolatedGrid, frame: &SpatialFrame) -> FgResult<WrittenRaster> {
        self.writes += 1;
        if self.writes == 2 {
            return Err(FgError::resource_unavailable("out/2.tif", "磁盘已满"));
        }
        self.inner.write(grid, frame)
    }
}

#[test]
fn test_writer_failure_aborts_regardless_of_policy() {
    let frame = frame();
    let samples = fg_io::read_mesh_samples(&container(3), &DatasetKeys::default()).unwrap();
    let mut sink = FailingSink {
        inner: MemoryRasterSink::new("out"),
        writes: 0,
    };

    let result = BatchDriver::new(&frame, &samples)
        .with_window(StepWindow::All)
        .with_policy(FailurePolicy::SkipAndWarn)
        .run(&mut sink, &SilentListener);

    assert!(matches!(result, Err(FgError::ResourceUnavailable { .. })));
    assert_eq!(sink.inner.steps(), vec![1]);
}
