use ping_wren::{
    run_session, RawChannel, ReplyData, Reporter, SessionConfig, SessionEvent, SessionStatistics,
    Ttl,
};
use std::time::Duration;

type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(argh::FromArgs)]
/// ping - send ICMP echo requests to a host and report round-trip statistics
struct Args {
    /// number of echo requests to send
    #[argh(option, short = 'c', default = "4")]
    count: u16,

    /// seconds to wait between requests
    #[argh(option, short = 'i', default = "1")]
    interval: u64,

    /// total ICMP packet size in bytes, including the 8-byte header
    #[argh(option, short = 's', default = "32")]
    size: usize,

    /// outbound time-to-live (best effort)
    #[argh(option, short = 't', default = "64")]
    ttl: u8,

    /// seconds to wait for each reply
    #[argh(option, short = 'w', default = "2")]
    timeout: u64,

    /// target host name or IPv4 address
    #[argh(positional)]
    address: Vec<String>,
}

struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ReplyReceived(ReplyData {
                package_size,
                ip_addr,
                ttl,
                ping_duration,
                ..
            }) => {
                println!(
                    "Reply from {ip_addr}: bytes={package_size} time={}ms TTL={ttl}",
                    ping_duration.as_millis()
                );
            }
            SessionEvent::Timeout { .. } => println!("Request timed out."),
            SessionEvent::InvalidReply { .. } => println!("Received an invalid reply."),
        }
    }
}

fn print_summary(target: &str, statistics: &SessionStatistics) {
    println!();
    println!("Ping statistics for {target}:");
    println!(
        "    Packets: Sent = {}, Received = {}, Lost = {} ({:.1}% loss),",
        statistics.sent,
        statistics.received,
        statistics.lost(),
        statistics.loss_percent()
    );
    if let (Some(min), Some(max), Some(average)) =
        (statistics.min_rtt, statistics.max_rtt, statistics.average_rtt())
    {
        println!("Approximate round trip times in milli-seconds:");
        println!(
            "    Minimum = {}ms, Maximum = {}ms, Average = {}ms",
            min.as_millis(),
            max.as_millis(),
            average.as_millis()
        );
    }
}

fn main() -> Result<(), GenericError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Args = argh::from_env();
    let Some(address) = args.address.first() else {
        println!("Usage: cli [options] <address>");
        return Ok(());
    };

    #[allow(clippy::cast_possible_truncation)]
    let identifier = (std::process::id() & 0xffff) as u16;
    let config = SessionConfig {
        target: address.clone(),
        count: args.count,
        interval: Duration::from_secs(args.interval),
        packet_size: args.size,
        timeout: Duration::from_secs(args.timeout),
        ttl: Ttl(args.ttl),
        identifier,
    };

    println!("Pinging {address} with {} bytes of data:", config.packet_size);
    let statistics = run_session::<RawChannel>(&config, &mut ConsoleReporter)?;
    print_summary(address, &statistics);

    // Packet loss is reported, not treated as a process failure.
    Ok(())
}
