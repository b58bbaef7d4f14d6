use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use radiolink_dispatch::legacy::LegacyRecord;
use radiolink_dispatch::Outcome;
use radiolink_frame::{message_type_name, Frame};
use radiolink_records::{Channel, PageMessage, RepeaterInfo, User};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    /// Frame (or payload) bytes, unmodified.
    Raw,
    /// Frame (or payload) bytes as lowercase hex.
    Hex,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct BuiltFrameOutput<'a> {
    message_type: i32,
    type_name: &'a str,
    payload_size: usize,
    checksum: String,
    frame: String,
}

/// Print a frame produced by one of the build commands.
pub fn print_built_frame(frame: &Frame, wire: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = BuiltFrameOutput {
                message_type: frame.message_type,
                type_name: message_type_name(frame.message_type),
                payload_size: frame.payload.len(),
                checksum: format!("{:08x}", frame.checksum),
                frame: hex::encode(wire),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["TYPE", "SIZE", "CRC32", "FRAME"]);
            table.add_row(vec![
                message_type_name(frame.message_type).to_string(),
                frame.payload.len().to_string(),
                format!("{:08x}", frame.checksum),
                hex::encode(wire),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "type={} ({}) size={} crc32={:08x} frame={}",
                frame.message_type,
                message_type_name(frame.message_type),
                frame.payload.len(),
                frame.checksum,
                hex::encode(wire)
            );
        }
        OutputFormat::Raw => print_raw(wire),
        OutputFormat::Hex => println!("{}", hex::encode(wire)),
    }
}

#[derive(Serialize)]
struct OutcomeOutput<'a> {
    outcome: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<&'a PageMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeater_info: Option<&'a RepeaterInfo>,
}

impl<'a> OutcomeOutput<'a> {
    fn from_outcome(outcome: &'a Outcome) -> Self {
        let mut out = Self {
            outcome: outcome_name(outcome),
            message_type: None,
            type_name: None,
            reason: None,
            page: None,
            repeater_info: None,
        };
        match outcome {
            Outcome::Page(page) => {
                out.set_type(radiolink_frame::PAGE_MESSAGE);
                out.page = Some(page);
            }
            Outcome::RepeaterInfo(info) => {
                out.set_type(radiolink_frame::REPEATER_INFO);
                out.repeater_info = Some(info);
            }
            Outcome::Handled(code) | Outcome::Unknown(code) => out.set_type(*code),
            Outcome::Dropped(reason) => {
                out.reason = Some(reason.as_str());
                if let radiolink_dispatch::DropReason::PayloadDecode { message_type } = reason {
                    out.set_type(*message_type);
                }
            }
        }
        out
    }

    fn set_type(&mut self, code: i32) {
        self.message_type = Some(code);
        self.type_name = Some(message_type_name(code));
    }
}

pub fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Page(_) => "page",
        Outcome::RepeaterInfo(_) => "repeater_info",
        Outcome::Handled(_) => "handled",
        Outcome::Unknown(_) => "unknown",
        Outcome::Dropped(_) => "dropped",
    }
}

/// Print the result of decoding one received frame.
pub fn print_outcome(outcome: &Outcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&OutcomeOutput::from_outcome(outcome)),
        OutputFormat::Table => print_outcome_table(outcome),
        OutputFormat::Pretty => print_outcome_pretty(outcome),
        OutputFormat::Raw | OutputFormat::Hex => println!("{}", outcome_name(outcome)),
    }
}

fn print_outcome_table(outcome: &Outcome) {
    match outcome {
        Outcome::Page(page) => {
            let mut table = new_table(vec!["CALLING", "CALLED", "VIA", "RETRANSMIT"]);
            table.add_row(vec![
                page.calling_user.clone(),
                page.called_user.clone(),
                page.via_node.clone(),
                page.retransmit.to_string(),
            ]);
            println!("{table}");
        }
        Outcome::RepeaterInfo(info) => {
            println!("{}", channel_table(&info.channels));
            println!("{}", user_table(&info.users));
        }
        other => print_outcome_pretty(other),
    }
}

fn print_outcome_pretty(outcome: &Outcome) {
    match outcome {
        Outcome::Page(page) => println!(
            "page from={} to={} via={} retransmit={}",
            page.calling_user, page.called_user, page.via_node, page.retransmit
        ),
        Outcome::RepeaterInfo(info) => {
            println!(
                "repeater_info channels={} users={}",
                info.channels.len(),
                info.users.len()
            );
            for ch in &info.channels {
                println!(
                    "  channel id={} parent={} name={} description={}",
                    ch.channel_id, ch.parent_id, ch.name, ch.description
                );
            }
            for user in &info.users {
                println!(
                    "  user id={} channel={} name={}",
                    user.user_id, user.channel_id, user.name
                );
            }
        }
        Outcome::Handled(code) => println!("handled type={code}"),
        Outcome::Unknown(code) => println!("unknown type={code} (ignored)"),
        Outcome::Dropped(reason) => println!("dropped reason={}", reason.as_str()),
    }
}

#[derive(Serialize)]
struct LegacyOutput<'a> {
    tag: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a User>,
}

/// Print a record decoded from the tag-prefixed path.
pub fn print_legacy(record: &LegacyRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let (channel, user) = match record {
                LegacyRecord::Channel(ch) => (Some(ch), None),
                LegacyRecord::User(u) => (None, Some(u)),
            };
            print_json(&LegacyOutput {
                tag: record.tag(),
                channel,
                user,
            });
        }
        OutputFormat::Table => match record {
            LegacyRecord::Channel(ch) => println!("{}", channel_table(std::slice::from_ref(ch))),
            LegacyRecord::User(u) => println!("{}", user_table(std::slice::from_ref(u))),
        },
        OutputFormat::Pretty | OutputFormat::Raw | OutputFormat::Hex => {
            println!("tag={} name={}", record.tag(), record.name());
        }
    }
}

fn channel_table(channels: &[Channel]) -> Table {
    let mut table = new_table(vec!["CHANNEL", "PARENT", "NAME", "DESCRIPTION"]);
    for ch in channels {
        table.add_row(vec![
            ch.channel_id.to_string(),
            ch.parent_id.to_string(),
            ch.name.clone(),
            ch.description.clone(),
        ]);
    }
    table
}

fn user_table(users: &[User]) -> Table {
    let mut table = new_table(vec!["USER", "CHANNEL", "CALLSIGN"]);
    for user in users {
        table.add_row(vec![
            user.user_id.to_string(),
            user.channel_id.to_string(),
            user.name.clone(),
        ]);
    }
    table
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use radiolink_dispatch::DropReason;

    use super::*;

    #[test]
    fn page_outcome_json() {
        let outcome = Outcome::Page(PageMessage::new("AB1CD", "EF2GH", true, "RPT1"));
        let json = serde_json::to_value(OutcomeOutput::from_outcome(&outcome)).unwrap();
        assert_eq!(json["outcome"], "page");
        assert_eq!(json["type_name"], "PAGE_MESSAGE");
        assert_eq!(json["page"]["via_node"], "RPT1");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn dropped_outcome_json() {
        let outcome = Outcome::Dropped(DropReason::Checksum);
        let json = serde_json::to_value(OutcomeOutput::from_outcome(&outcome)).unwrap();
        assert_eq!(json["outcome"], "dropped");
        assert_eq!(json["reason"], "checksum");
        assert!(json.get("message_type").is_none());
    }

    #[test]
    fn unknown_outcome_json() {
        let outcome = Outcome::Unknown(77);
        let json = serde_json::to_value(OutcomeOutput::from_outcome(&outcome)).unwrap();
        assert_eq!(json["message_type"], 77);
        assert_eq!(json["type_name"], "UNKNOWN");
    }
}
