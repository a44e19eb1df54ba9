//! Rebuilds the demonstration charts as plain data descriptions.
//!
//! Mirrors the classic stock-chart demo set: annotated sine waves, a
//! multi-plot minute chart, and a weekday-only stock chart with moving
//! averages, volume, and a stochastic oscillator. Instead of opening a
//! window, each description is validated and summarized, and the first one
//! is round-tripped through its JSON form.

use chart_data_rs::config::{
    AnnotationConfig, ArrowAnnotation, ChartConfig, Color, LineSeriesConfig, LineStroke,
    OhlcSeriesConfig, PlotConfig, ReferenceLine, SeriesConfig, TextAlignment, TextAnnotation,
    VolumeDirection, VolumeSeriesConfig,
};
use chart_data_rs::core::primitives::epoch_millis;
use chart_data_rs::core::{
    IntervalUnit, OhlcvSeries, SampleInterval, ascending_timestamps, sma, sma_batch, stochastic,
};
use chart_data_rs::error::SeriesResult;
use chart_data_rs::synth::{RandomWalkConfig, SinusoidConfig, random_ohlcv, random_sinusoid};
use chrono::{Months, TimeDelta, Utc, Weekday};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn line(values: Vec<f64>, color: Color) -> SeriesConfig {
    SeriesConfig::Line(
        LineSeriesConfig::new(values)
            .with_color(color)
            .with_stroke(LineStroke::solid(1.0)),
    )
}

fn named_line(name: &str, values: Vec<f64>, color: Color) -> SeriesConfig {
    SeriesConfig::Line(
        LineSeriesConfig::new(values)
            .with_name(name)
            .with_color(color)
            .with_stroke(LineStroke::solid(1.0)),
    )
}

fn main() -> SeriesResult<()> {
    let mut rng = StdRng::seed_from_u64(7);

    // Eighteen months of daily data, stock series skipping weekends.
    let end_date = Utc::now();
    let start_date = end_date - Months::new(18);
    let weekend = [Weekday::Sat, Weekday::Sun];

    let ohlcv_times = epoch_millis(&ascending_timestamps(
        start_date,
        end_date,
        SampleInterval::of(IntervalUnit::Day),
        &weekend,
    )?);

    let dohlcv = random_ohlcv(&ohlcv_times, RandomWalkConfig::default(), &mut rng)?;

    let mut close_smas = sma_batch(&[20, 50, 200], dohlcv.closes())?;
    let sma200 = close_smas.pop().expect("three windows in, three out");
    let sma50 = close_smas.pop().expect("three windows in, three out");
    let sma20 = close_smas.pop().expect("three windows in, three out");
    let vol_sma90 = sma(90, dohlcv.volumes())?;

    let k_lookback = 14;
    let d_smoothing = 3;
    let stoch = stochastic(
        k_lookback,
        d_smoothing,
        dohlcv.highs(),
        dohlcv.lows(),
        dohlcv.closes(),
    )?;

    let ohlc_end = dohlcv.len() - 1;
    let ohlc_start = (ohlc_end as f64 * 0.75) as usize;

    // Sinusoid series on the full daily calendar (no skip days).
    let daily_times = epoch_millis(&ascending_timestamps(
        start_date,
        end_date,
        SampleInterval::of(IntervalUnit::Day),
        &[],
    )?);
    let daily_len = daily_times.len();

    let sin_daily: Vec<Vec<f64>> = (0..4)
        .map(|_| random_sinusoid(SinusoidConfig::with_amplitude(60.0), daily_len, &mut rng))
        .collect::<SeriesResult<_>>()?;

    let daily_end = daily_len - 1;
    let daily_start = (daily_end as f64 * 0.2) as usize;

    // Eight hours of minute data.
    let minute_times = epoch_millis(&ascending_timestamps(
        end_date - TimeDelta::hours(8),
        end_date,
        SampleInterval::of(IntervalUnit::Minute),
        &[],
    )?);
    let minute_len = minute_times.len();

    let sin_minute: Vec<Vec<f64>> = [40.0, 60.0, 80.0, 100.0]
        .iter()
        .map(|&amplitude| {
            random_sinusoid(
                SinusoidConfig::with_amplitude(amplitude),
                minute_len,
                &mut rng,
            )
        })
        .collect::<SeriesResult<_>>()?;

    // Annotation anchors.
    let arrow_index = (daily_len as f64 * 0.75) as usize;
    let arrow_x = daily_times[arrow_index] as f64;
    let arrow_y = sin_daily[0][arrow_index];

    let event_index = dohlcv.len() - 10;
    let event_bar = dohlcv.bar(event_index).expect("event index in range");
    let event_x = event_bar.time as f64;

    let mut charts = Vec::new();

    charts.push(
        ChartConfig::new(daily_times.clone())
            .with_title("Simple Time Series With Annotations")
            .with_index_range(daily_start, daily_end)
            .with_plot(
                PlotConfig::new()
                    .with_series(named_line("Amplitude", sin_daily[0].clone(), Color::BLUE))
                    .with_annotation(AnnotationConfig::Arrow(
                        ArrowAnnotation::new(arrow_x, arrow_y)
                            .with_angle(180.0)
                            .with_color(Color::RED)
                            .with_text(format!("{arrow_y:.1}")),
                    ))
                    .with_annotation(AnnotationConfig::Arrow(
                        ArrowAnnotation::new(arrow_x, arrow_y).with_color(Color::RED),
                    ))
                    .with_annotation(AnnotationConfig::Text(
                        TextAnnotation::new(arrow_x, arrow_y, "This value!")
                            .with_color(Color::DARK_GREEN)
                            .with_padding_left_px(5.0)
                            .with_alignment(TextAlignment::BaselineLeft)
                            .with_angle(90.0),
                    )),
            ),
    );

    charts.push(
        ChartConfig::new(daily_times.clone())
            .with_title("Multi Daily Time Series")
            .with_index_range(daily_start, daily_end)
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Values")
                    .with_series(line(sin_daily[0].clone(), Color::BLUE))
                    .with_series(line(sin_daily[1].clone(), Color::RED))
                    .with_series(line(sin_daily[2].clone(), Color::DARK_GREEN))
                    .with_series(line(sin_daily[3].clone(), Color::MAGENTA)),
            ),
    );

    charts.push(
        ChartConfig::new(minute_times)
            .with_title("Multi Plot Minute Time Series")
            .with_index_range(0, minute_len - 1)
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Values")
                    .with_series(line(sin_minute[0].clone(), Color::BLUE))
                    .with_series(line(sin_minute[1].clone(), Color::RED))
                    .with_series(line(sin_minute[2].clone(), Color::DARK_GREEN))
                    .with_series(line(sin_minute[3].clone(), Color::MAGENTA)),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Amplitudes")
                    .with_series(line(sin_minute[1].clone(), Color::GRAY))
                    .with_series(line(sin_minute[2].clone(), Color::LIGHT_GRAY)),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Series 1")
                    .with_series(line(sin_minute[0].clone(), Color::BLUE)),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Series 2")
                    .with_series(line(sin_minute[1].clone(), Color::RED)),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Series 3")
                    .with_series(line(sin_minute[2].clone(), Color::DARK_GREEN)),
            ),
    );

    charts.push(
        ChartConfig::new(ohlcv_times)
            .with_title("Stock Chart Time Series With Weekend Gaps, Lines, and Annotations")
            .with_index_range(ohlc_start, ohlc_end)
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Price")
                    .with_weight(3)
                    .with_series(SeriesConfig::Ohlc(
                        OhlcSeriesConfig::new(dohlcv.clone())
                            .with_up_color(Color::WHITE)
                            .with_down_color(Color::RED),
                    ))
                    .with_series(named_line("MA(20)", sma20, Color::MAGENTA))
                    .with_series(named_line("MA(50)", sma50, Color::BLUE))
                    .with_series(named_line("MA(200)", sma200, Color::RED))
                    .with_annotation(AnnotationConfig::Arrow(
                        ArrowAnnotation::new(event_x, event_bar.high)
                            .with_angle(270.0)
                            .with_color(Color::DARK_GREEN)
                            .with_text_alignment(TextAlignment::BottomCenter)
                            .with_text(format!("{:.2}", event_bar.high)),
                    ))
                    .with_reference_line(
                        ReferenceLine::horizontal(dohlcv.closes()[0]).with_color(Color::LIGHT_GRAY),
                    ),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Volume")
                    .with_series(SeriesConfig::VolumeBars(
                        VolumeSeriesConfig::new(dohlcv.clone(), VolumeDirection::CloseUp)
                            .with_color(Color::WHITE),
                    ))
                    .with_series(SeriesConfig::VolumeBars(
                        VolumeSeriesConfig::new(dohlcv.clone(), VolumeDirection::CloseDown)
                            .with_color(Color::RED),
                    ))
                    .with_series(named_line("MA(90)", vol_sma90, Color::BLUE))
                    .with_annotation(AnnotationConfig::Arrow(
                        ArrowAnnotation::new(event_x, event_bar.volume)
                            .with_angle(270.0)
                            .with_color(Color::DARK_GREEN)
                            .with_text_alignment(TextAlignment::BottomCenter)
                            .with_text(format!("{:.0}", event_bar.volume)),
                    ))
                    .with_reference_line(
                        ReferenceLine::horizontal(dohlcv.volumes()[0]).with_color(Color::DARK_GREEN),
                    ),
            )
            .with_plot(
                PlotConfig::new()
                    .with_y_axis_label("Stoch")
                    .with_y_axis_range(0.0, 100.0)
                    .with_y_axis_tick_size(50.0)
                    .with_series(named_line(
                        &format!("K({k_lookback})"),
                        stoch.pct_k,
                        Color::RED,
                    ))
                    .with_series(named_line(
                        &format!("D({d_smoothing})"),
                        stoch.pct_d,
                        Color::BLUE,
                    ))
                    .with_reference_line(ReferenceLine::horizontal(80.0))
                    .with_reference_line(ReferenceLine::horizontal(50.0).with_color(Color::BLUE))
                    .with_reference_line(ReferenceLine::horizontal(20.0)),
            ),
    );

    for chart in &charts {
        chart.validate()?;
        let title = chart.title.as_deref().unwrap_or("<untitled>");
        let series_count: usize = chart.plots.iter().map(|plot| plot.series.len()).sum();
        println!(
            "{title}: {} plots, {series_count} series, {} time points",
            chart.plots.len(),
            chart.times.len()
        );
    }

    // JSON round trip: the serialized form is the interchange surface.
    let json = charts[0].to_json_pretty()?;
    let parsed = ChartConfig::from_json_str(&json)?;
    parsed.validate()?;
    assert_eq!(json, parsed.to_json_pretty()?);
    println!("round-tripped `{}` through {} bytes of JSON", charts[0].title.as_deref().unwrap_or(""), json.len());

    Ok(())
}
