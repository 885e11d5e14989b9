// crates/fg_workflow/src/pipeline.rs

//! 导出管道
//!
//! 按 [`ExportConfig`] 加载空间框架与采样点集，然后运行批处理。
//! 所有加载与窗口检查都在第一次写出之前完成。

use crate::batch::BatchDriver;
use crate::cancel::CancellationToken;
use crate::progress::ProgressListener;
use crate::report::BatchReport;
use fg_config::ExportConfig;
use fg_foundation::error::FgResult;
use fg_io::{load_spatial_frame, read_mesh_samples, GeoTiffWriter, Hdf5Container, RasterSink, ResultContainer};
use fg_terrain::{MeshSamples, SpatialFrame};

/// 从结果文件读取采样点集，容器句柄在返回前释放
pub fn load_samples(config: &ExportConfig) -> FgResult<MeshSamples> {
    let container = Hdf5Container::open(&config.result_container)?;
    read_mesh_samples(&container, &config.datasets)
}

/// 按配置导出 GeoTIFF 时间序列
pub fn export_rasters(
    config: &ExportConfig,
    listener: &dyn ProgressListener,
    token: &CancellationToken,
) -> FgResult<BatchReport> {
    config.validate()?;

    let frame = load_spatial_frame(&config.reference_raster)?;
    let samples = load_samples(config)?;
    config.steps.resolve(samples.n_steps())?;

    let mut writer = GeoTiffWriter::new(&config.output_directory, config.nodata_value)?;
    run_batch(config, &frame, &samples, &mut writer, listener, token)
}

/// 使用给定的容器与输出运行导出
///
/// 框架由调用方提供；采样点集从 `container` 读取。
pub fn export_with_container<C>(
    config: &ExportConfig,
    frame: &SpatialFrame,
    container: &C,
    sink: &mut dyn RasterSink,
    listener: &dyn ProgressListener,
    token: &CancellationToken,
) -> FgResult<BatchReport>
where
    C: ResultContainer + ?Sized,
{
    config.validate()?;
    let samples = read_mesh_samples(container, &config.datasets)?;
    run_batch(config, frame, &samples, sink, listener, token)
}

fn run_batch(
    config: &ExportConfig,
    frame: &SpatialFrame,
    samples: &MeshSamples,
    sink: &mut dyn RasterSink,
    listener: &dyn ProgressListener,
    token: &CancellationToken,
) -> FgResult<BatchReport> {
    BatchDriver::new(frame, samples)
        .with_window(config.steps)
        .with_policy(config.failure_policy)
        .with_cancellation(token.clone())
        .run(sink, listener)
}
