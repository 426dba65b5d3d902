//! The event catalogue: a tagged union over every `ObjectType` this crate
//! knows how to decode, plus the single dispatch point that reads one object
//! body given its already-parsed header.
//!
//! This is the Rust re-expression of the reference implementation's per-type
//! constructor/decoder/encoder/sizer table (see `SPEC_FULL.md` §4.3). Where the
//! reference dispatches on a virtual method call, this crate matches on the
//! `Event` enum; where it indexes an array by tag, `decode_body` matches on
//! `ObjectType`.

use crate::codec;
use crate::error::{BlfError, Result};
use crate::header::{ObjectHeader, ObjectHeaderBase};
use crate::object_type::ObjectType;
use crate::objects::afdx::*;
use crate::objects::app::*;
use crate::objects::arinc429::*;
use crate::objects::can::*;
use crate::objects::ethernet::*;
use crate::objects::flexray::*;
use crate::objects::lin::*;
use crate::objects::misc_bus::*;
use crate::objects::most::*;
use std::io::{Cursor, Write};

/// One decoded event record. Every on-disk object type this crate recognises
/// has exactly one arm here; tags the catalogue doesn't recognise (including
/// the reserved gaps named in the tag enumeration) never reach this type —
/// [`decode_body`] skips their payload and returns `Ok(None)` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CanMessage(CanMessage),
    CanMessage2(CanMessage2),
    CanErrorFrame(CanErrorFrame),
    CanErrorFrameExt(CanErrorFrameExt),
    CanOverloadFrame(CanOverloadFrame),
    CanDriverStatistic(CanDriverStatistic),
    CanDriverError(CanDriverError),
    CanDriverErrorExt(CanDriverErrorExt),
    CanDriverHwSync(CanDriverHwSync),
    CanFdMessage(CanFdMessage),
    CanFdMessage64(CanFdMessage64),
    CanFdErrorFrame64(CanFdErrorFrame64),

    LinMessage(LinMessage),
    LinMessage2(LinMessage2),
    LinCrcError(LinCrcError),
    LinReceiveError(LinReceiveError),
    LinSendError(LinSendError),
    LinSlaveTimeout(LinSlaveTimeout),
    LinSchedulerModeChange(LinSchedulerModeChange),
    LinSyncError(LinSyncError),
    LinBaudrate(LinBaudrate),
    LinSleep(LinSleep),
    LinWakeup(LinWakeup),
    LinUnexpectedWakeup(LinUnexpectedWakeup),
    LinDlcInfo(LinDlcInfo),
    LinChecksumInfo(LinChecksumInfo),
    LinSpikeEvent(LinSpikeEvent),
    LinLongDomSig(LinLongDomSig),
    LinDisturbanceEvent(LinDisturbanceEvent),
    LinShortOrSlowResponse(LinShortOrSlowResponse),
    LinStatistic(LinStatistic),
    LinSyncError2(LinSyncError2),
    LinCrcError2(LinCrcError2),
    LinReceiveError2(LinReceiveError2),
    LinSendError2(LinSendError2),
    LinWakeup2(LinWakeup2),
    LinSpikeEvent2(LinSpikeEvent2),
    LinLongDomSig2(LinLongDomSig2),
    LinShortOrSlowResponse2(LinShortOrSlowResponse2),

    MostSpy(MostSpy),
    MostCtrl(MostCtrl),
    MostPkt(MostPkt),
    MostPkt2(MostPkt2),
    MostLightLock(MostLightLock),
    MostStatistic(MostStatistic),
    MostHwMode(MostHwMode),
    MostReg(MostReg),
    MostGenReg(MostGenReg),
    MostNetState(MostNetState),
    MostDataLost(MostDataLost),
    MostTrigger(MostTrigger),
    MostStatisticEx(MostStatisticEx),
    MostTxLight(MostTxLight),
    MostAllocTab(MostAllocTab),
    MostStress(MostStress),
    Most150Message(Most150Message),
    Most150Pkt(Most150Pkt),
    MostEthernetPkt(MostEthernetPkt),
    Most150MessageFragment(Most150MessageFragment),
    Most150PktFragment(Most150PktFragment),
    MostEthernetPktFragment(MostEthernetPktFragment),
    MostSystemEvent(MostSystemEvent),
    Most150AllocTab(Most150AllocTab),
    Most50Message(Most50Message),
    Most50Pkt(Most50Pkt),
    MostEcl(MostEcl),

    FlexRayData(FlexRayData),
    FlexRaySync(FlexRaySync),
    FlexRayV6Message(FlexRayV6Message),
    FlexRayV6StartCycleEvent(FlexRayV6StartCycleEvent),
    FlexRayStatusEvent(FlexRayStatusEvent),
    FlexRayVFrReceiveMsg(FlexRayVFrReceiveMsg),
    FlexRayVFrReceiveMsgEx(FlexRayVFrReceiveMsgEx),
    FlexRayVFrError(FlexRayVFrError),
    FlexRayVFrStatus(FlexRayVFrStatus),
    FlexRayVFrStartCycle(FlexRayVFrStartCycle),

    EthernetFrame(Box<EthernetFrame>),
    EthernetRxError(EthernetRxError),
    EthernetStatus(EthernetStatus),
    EthernetStatistic(EthernetStatistic),
    EthernetFrameEx(EthernetFrameEvent),
    EthernetFrameForwarded(EthernetFrameEvent),
    EthernetErrorEx(EthernetFrameEvent),
    EthernetErrorForwarded(EthernetFrameEvent),

    AfdxFrame(AfdxFrame),
    AfdxStatistic(AfdxStatistic),
    AfdxStatus(AfdxStatus),
    AfdxBusStatistic(AfdxBusStatistic),
    AfdxErrorEvent(AfdxErrorEvent),

    A429Message(A429Message),
    A429Error(A429Error),
    A429Status(A429Status),
    A429BusStatistic(A429BusStatistic),

    GpsEvent(GpsEvent),
    J1708Message(J1708Message),
    J1708VirtualMsg(J1708Message),
    WlanFrame(WlanFrame),
    WlanStatistic(WlanStatistic),
    KlineStatusEvent(KlineStatusEvent),

    AppTrigger(AppTrigger),
    EnvironmentVariable(EnvironmentVariable),
    RealtimeClock(RealtimeClock),
    AppText(AppText),
    SysVariable(SysVariable),
    EventComment(EventComment),
    GlobalMarker(GlobalMarker),
    SerialEvent(SerialEvent),
    OverrunError(OverrunError),
    TestStructure(TestStructure),
    DiagRequestInterpretation(DiagRequestInterpretation),
    Unknown115(Unknown115),
}

macro_rules! for_each_arm {
    ($self:expr, $bind:ident => $body:expr) => {
        match $self {
            Event::CanMessage($bind) => $body,
            Event::CanMessage2($bind) => $body,
            Event::CanErrorFrame($bind) => $body,
            Event::CanErrorFrameExt($bind) => $body,
            Event::CanOverloadFrame($bind) => $body,
            Event::CanDriverStatistic($bind) => $body,
            Event::CanDriverError($bind) => $body,
            Event::CanDriverErrorExt($bind) => $body,
            Event::CanDriverHwSync($bind) => $body,
            Event::CanFdMessage($bind) => $body,
            Event::CanFdMessage64($bind) => $body,
            Event::CanFdErrorFrame64($bind) => $body,
            Event::LinMessage($bind) => $body,
            Event::LinMessage2($bind) => $body,
            Event::LinCrcError($bind) => $body,
            Event::LinReceiveError($bind) => $body,
            Event::LinSendError($bind) => $body,
            Event::LinSlaveTimeout($bind) => $body,
            Event::LinSchedulerModeChange($bind) => $body,
            Event::LinSyncError($bind) => $body,
            Event::LinBaudrate($bind) => $body,
            Event::LinSleep($bind) => $body,
            Event::LinWakeup($bind) => $body,
            Event::LinUnexpectedWakeup($bind) => $body,
            Event::LinDlcInfo($bind) => $body,
            Event::LinChecksumInfo($bind) => $body,
            Event::LinSpikeEvent($bind) => $body,
            Event::LinLongDomSig($bind) => $body,
            Event::LinDisturbanceEvent($bind) => $body,
            Event::LinShortOrSlowResponse($bind) => $body,
            Event::LinStatistic($bind) => $body,
            Event::LinSyncError2($bind) => $body,
            Event::LinCrcError2($bind) => $body,
            Event::LinReceiveError2($bind) => $body,
            Event::LinSendError2($bind) => $body,
            Event::LinWakeup2($bind) => $body,
            Event::LinSpikeEvent2($bind) => $body,
            Event::LinLongDomSig2($bind) => $body,
            Event::LinShortOrSlowResponse2($bind) => $body,
            Event::MostSpy($bind) => $body,
            Event::MostCtrl($bind) => $body,
            Event::MostPkt($bind) => $body,
            Event::MostPkt2($bind) => $body,
            Event::MostLightLock($bind) => $body,
            Event::MostStatistic($bind) => $body,
            Event::MostHwMode($bind) => $body,
            Event::MostReg($bind) => $body,
            Event::MostGenReg($bind) => $body,
            Event::MostNetState($bind) => $body,
            Event::MostDataLost($bind) => $body,
            Event::MostTrigger($bind) => $body,
            Event::MostStatisticEx($bind) => $body,
            Event::MostTxLight($bind) => $body,
            Event::MostAllocTab($bind) => $body,
            Event::MostStress($bind) => $body,
            Event::Most150Message($bind) => $body,
            Event::Most150Pkt($bind) => $body,
            Event::MostEthernetPkt($bind) => $body,
            Event::Most150MessageFragment($bind) => $body,
            Event::Most150PktFragment($bind) => $body,
            Event::MostEthernetPktFragment($bind) => $body,
            Event::MostSystemEvent($bind) => $body,
            Event::Most150AllocTab($bind) => $body,
            Event::Most50Message($bind) => $body,
            Event::Most50Pkt($bind) => $body,
            Event::MostEcl($bind) => $body,
            Event::FlexRayData($bind) => $body,
            Event::FlexRaySync($bind) => $body,
            Event::FlexRayV6Message($bind) => $body,
            Event::FlexRayV6StartCycleEvent($bind) => $body,
            Event::FlexRayStatusEvent($bind) => $body,
            Event::FlexRayVFrReceiveMsg($bind) => $body,
            Event::FlexRayVFrReceiveMsgEx($bind) => $body,
            Event::FlexRayVFrError($bind) => $body,
            Event::FlexRayVFrStatus($bind) => $body,
            Event::FlexRayVFrStartCycle($bind) => $body,
            Event::EthernetFrame($bind) => $body,
            Event::EthernetRxError($bind) => $body,
            Event::EthernetStatus($bind) => $body,
            Event::EthernetStatistic($bind) => $body,
            Event::EthernetFrameEx($bind) => $body,
            Event::EthernetFrameForwarded($bind) => $body,
            Event::EthernetErrorEx($bind) => $body,
            Event::EthernetErrorForwarded($bind) => $body,
            Event::AfdxFrame($bind) => $body,
            Event::AfdxStatistic($bind) => $body,
            Event::AfdxStatus($bind) => $body,
            Event::AfdxBusStatistic($bind) => $body,
            Event::AfdxErrorEvent($bind) => $body,
            Event::A429Message($bind) => $body,
            Event::A429Error($bind) => $body,
            Event::A429Status($bind) => $body,
            Event::A429BusStatistic($bind) => $body,
            Event::GpsEvent($bind) => $body,
            Event::J1708Message($bind) => $body,
            Event::J1708VirtualMsg($bind) => $body,
            Event::WlanFrame($bind) => $body,
            Event::WlanStatistic($bind) => $body,
            Event::KlineStatusEvent($bind) => $body,
            Event::AppTrigger($bind) => $body,
            Event::EnvironmentVariable($bind) => $body,
            Event::RealtimeClock($bind) => $body,
            Event::AppText($bind) => $body,
            Event::SysVariable($bind) => $body,
            Event::EventComment($bind) => $body,
            Event::GlobalMarker($bind) => $body,
            Event::SerialEvent($bind) => $body,
            Event::OverrunError($bind) => $body,
            Event::TestStructure($bind) => $body,
            Event::DiagRequestInterpretation($bind) => $body,
            Event::Unknown115($bind) => $body,
        }
    };
}

impl Event {
    /// The header every variant carries, including the tag that selects it.
    pub fn header(&self) -> &ObjectHeader {
        for_each_arm!(self, e => &e.header)
    }

    pub fn object_type(&self) -> ObjectType {
        self.header().base.object_type
    }

    /// Recomputes `headerSize`/`objectSize`, writes the header and body, and
    /// pads the total to a 4-byte boundary per the universal alignment rule.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut header = *self.header();
        header.base.header_size = header.calculate_header_size();
        let body_len = for_each_arm!(self, e => e.body_len());
        header.base.object_size = header.base.header_size as u32 + body_len;

        let mut body_buf = Vec::new();
        self.write_body_with_header(&mut body_buf, header)?;

        let padded = codec::align4(body_buf.len() as u64) as usize;
        body_buf.resize(padded, 0);
        writer.write_all(&body_buf)?;
        Ok(())
    }

    fn write_body_with_header(&self, writer: &mut Vec<u8>, header: ObjectHeader) -> Result<()> {
        macro_rules! write_with_header {
            ($bind:ident) => {{
                let mut e = $bind.clone();
                e.header = header;
                e.write(writer)
            }};
        }
        match self {
            Event::CanMessage(e) => write_with_header!(e),
            Event::CanMessage2(e) => write_with_header!(e),
            Event::CanErrorFrame(e) => write_with_header!(e),
            Event::CanErrorFrameExt(e) => write_with_header!(e),
            Event::CanOverloadFrame(e) => write_with_header!(e),
            Event::CanDriverStatistic(e) => write_with_header!(e),
            Event::CanDriverError(e) => write_with_header!(e),
            Event::CanDriverErrorExt(e) => write_with_header!(e),
            Event::CanDriverHwSync(e) => write_with_header!(e),
            Event::CanFdMessage(e) => write_with_header!(e),
            Event::CanFdMessage64(e) => write_with_header!(e),
            Event::CanFdErrorFrame64(e) => write_with_header!(e),
            Event::LinMessage(e) => write_with_header!(e),
            Event::LinMessage2(e) => write_with_header!(e),
            Event::LinCrcError(e) => write_with_header!(e),
            Event::LinReceiveError(e) => write_with_header!(e),
            Event::LinSendError(e) => write_with_header!(e),
            Event::LinSlaveTimeout(e) => write_with_header!(e),
            Event::LinSchedulerModeChange(e) => write_with_header!(e),
            Event::LinSyncError(e) => write_with_header!(e),
            Event::LinBaudrate(e) => write_with_header!(e),
            Event::LinSleep(e) => write_with_header!(e),
            Event::LinWakeup(e) => write_with_header!(e),
            Event::LinUnexpectedWakeup(e) => write_with_header!(e),
            Event::LinDlcInfo(e) => write_with_header!(e),
            Event::LinChecksumInfo(e) => write_with_header!(e),
            Event::LinSpikeEvent(e) => write_with_header!(e),
            Event::LinLongDomSig(e) => write_with_header!(e),
            Event::LinDisturbanceEvent(e) => write_with_header!(e),
            Event::LinShortOrSlowResponse(e) => write_with_header!(e),
            Event::LinStatistic(e) => write_with_header!(e),
            Event::LinSyncError2(e) => write_with_header!(e),
            Event::LinCrcError2(e) => write_with_header!(e),
            Event::LinReceiveError2(e) => write_with_header!(e),
            Event::LinSendError2(e) => write_with_header!(e),
            Event::LinWakeup2(e) => write_with_header!(e),
            Event::LinSpikeEvent2(e) => write_with_header!(e),
            Event::LinLongDomSig2(e) => write_with_header!(e),
            Event::LinShortOrSlowResponse2(e) => write_with_header!(e),
            Event::MostSpy(e) => write_with_header!(e),
            Event::MostCtrl(e) => write_with_header!(e),
            Event::MostPkt(e) => write_with_header!(e),
            Event::MostPkt2(e) => write_with_header!(e),
            Event::MostLightLock(e) => write_with_header!(e),
            Event::MostStatistic(e) => write_with_header!(e),
            Event::MostHwMode(e) => write_with_header!(e),
            Event::MostReg(e) => write_with_header!(e),
            Event::MostGenReg(e) => write_with_header!(e),
            Event::MostNetState(e) => write_with_header!(e),
            Event::MostDataLost(e) => write_with_header!(e),
            Event::MostTrigger(e) => write_with_header!(e),
            Event::MostStatisticEx(e) => write_with_header!(e),
            Event::MostTxLight(e) => write_with_header!(e),
            Event::MostAllocTab(e) => write_with_header!(e),
            Event::MostStress(e) => write_with_header!(e),
            Event::Most150Message(e) => write_with_header!(e),
            Event::Most150Pkt(e) => write_with_header!(e),
            Event::MostEthernetPkt(e) => write_with_header!(e),
            Event::Most150MessageFragment(e) => write_with_header!(e),
            Event::Most150PktFragment(e) => write_with_header!(e),
            Event::MostEthernetPktFragment(e) => write_with_header!(e),
            Event::MostSystemEvent(e) => write_with_header!(e),
            Event::Most150AllocTab(e) => write_with_header!(e),
            Event::Most50Message(e) => write_with_header!(e),
            Event::Most50Pkt(e) => write_with_header!(e),
            Event::MostEcl(e) => write_with_header!(e),
            Event::FlexRayData(e) => write_with_header!(e),
            Event::FlexRaySync(e) => write_with_header!(e),
            Event::FlexRayV6Message(e) => write_with_header!(e),
            Event::FlexRayV6StartCycleEvent(e) => write_with_header!(e),
            Event::FlexRayStatusEvent(e) => write_with_header!(e),
            Event::FlexRayVFrReceiveMsg(e) => write_with_header!(e),
            Event::FlexRayVFrReceiveMsgEx(e) => write_with_header!(e),
            Event::FlexRayVFrError(e) => write_with_header!(e),
            Event::FlexRayVFrStatus(e) => write_with_header!(e),
            Event::FlexRayVFrStartCycle(e) => write_with_header!(e),
            Event::EthernetFrame(e) => write_with_header!(e),
            Event::EthernetRxError(e) => write_with_header!(e),
            Event::EthernetStatus(e) => write_with_header!(e),
            Event::EthernetStatistic(e) => write_with_header!(e),
            Event::EthernetFrameEx(e) => write_with_header!(e),
            Event::EthernetFrameForwarded(e) => write_with_header!(e),
            Event::EthernetErrorEx(e) => write_with_header!(e),
            Event::EthernetErrorForwarded(e) => write_with_header!(e),
            Event::AfdxFrame(e) => write_with_header!(e),
            Event::AfdxStatistic(e) => write_with_header!(e),
            Event::AfdxStatus(e) => write_with_header!(e),
            Event::AfdxBusStatistic(e) => write_with_header!(e),
            Event::AfdxErrorEvent(e) => write_with_header!(e),
            Event::A429Message(e) => write_with_header!(e),
            Event::A429Error(e) => write_with_header!(e),
            Event::A429Status(e) => write_with_header!(e),
            Event::A429BusStatistic(e) => write_with_header!(e),
            Event::GpsEvent(e) => write_with_header!(e),
            Event::J1708Message(e) => write_with_header!(e),
            Event::J1708VirtualMsg(e) => write_with_header!(e),
            Event::WlanFrame(e) => write_with_header!(e),
            Event::WlanStatistic(e) => write_with_header!(e),
            Event::KlineStatusEvent(e) => write_with_header!(e),
            Event::AppTrigger(e) => write_with_header!(e),
            Event::EnvironmentVariable(e) => write_with_header!(e),
            Event::RealtimeClock(e) => write_with_header!(e),
            Event::AppText(e) => write_with_header!(e),
            Event::SysVariable(e) => write_with_header!(e),
            Event::EventComment(e) => write_with_header!(e),
            Event::GlobalMarker(e) => write_with_header!(e),
            Event::SerialEvent(e) => write_with_header!(e),
            Event::OverrunError(e) => write_with_header!(e),
            Event::TestStructure(e) => write_with_header!(e),
            Event::DiagRequestInterpretation(e) => write_with_header!(e),
            Event::Unknown115(e) => write_with_header!(e),
        }
    }
}

/// Body length declared by the header, for the handful of variants whose
/// decoder needs to know how much of the object is left (variable-tail LIN
/// `*2` events, `FlexRayVFrReceiveMsgEx`'s padded trailer).
fn declared_body_len(header: &ObjectHeader) -> usize {
    let header_size = header.base.header_size as u32;
    header.base.object_size.saturating_sub(header_size) as usize
}

/// Reads one object body given its already-parsed extended header. Assumes
/// the caller positioned `cursor` right after the header and will, after this
/// call returns, advance past any bytes left over up to `object_size` (padding
/// or reserved trailer) — this function itself never reads beyond its own
/// fields.
///
/// Returns `Ok(None)` for reserved or unrecognised tags: the reference format
/// treats these as skip, not error (`SPEC_FULL.md` §4.3).
pub fn decode_body(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Option<Event>> {
    let object_type = header.base.object_type;
    if object_type.is_reserved_or_unknown() {
        return Ok(None);
    }

    let event = match object_type {
        ObjectType::CanMessage => Event::CanMessage(CanMessage::read(cursor, header)?),
        ObjectType::CanMessage2 => Event::CanMessage2(CanMessage2::read(cursor, header)?),
        ObjectType::CanErrorFrame => Event::CanErrorFrame(CanErrorFrame::read(cursor, header)?),
        ObjectType::CanErrorExt => Event::CanErrorFrameExt(CanErrorFrameExt::read(cursor, header)?),
        ObjectType::CanOverloadFrame => Event::CanOverloadFrame(CanOverloadFrame::read(cursor, header)?),
        ObjectType::CanDriverStatistic => Event::CanDriverStatistic(CanDriverStatistic::read(cursor, header)?),
        ObjectType::CanDriverError => Event::CanDriverError(CanDriverError::read(cursor, header)?),
        ObjectType::CanDriverErrorExt => Event::CanDriverErrorExt(CanDriverErrorExt::read(cursor, header)?),
        ObjectType::CanDriverSync => Event::CanDriverHwSync(CanDriverHwSync::read(cursor, header)?),
        ObjectType::CanFdMessage => Event::CanFdMessage(CanFdMessage::read(cursor, header)?),
        ObjectType::CanFdMessage64 => Event::CanFdMessage64(CanFdMessage64::read(cursor, header)?),
        ObjectType::CanFdErrorFrame64 => Event::CanFdErrorFrame64(CanFdErrorFrame64::read(cursor, header)?),

        ObjectType::LinMessage => Event::LinMessage(LinMessage::read(cursor, header)?),
        ObjectType::LinMessage2 => Event::LinMessage2(LinMessage2::read(cursor, header)?),
        ObjectType::LinCrcError => Event::LinCrcError(LinCrcError::read(cursor, header)?),
        ObjectType::LinReceiveError => Event::LinReceiveError(LinReceiveError::read(cursor, header)?),
        ObjectType::LinSendError => Event::LinSendError(LinSendError::read(cursor, header)?),
        ObjectType::LinSlaveTimeout => Event::LinSlaveTimeout(LinSlaveTimeout::read(cursor, header)?),
        ObjectType::LinSchedulerModeChange => Event::LinSchedulerModeChange(LinSchedulerModeChange::read(cursor, header)?),
        ObjectType::LinSyncError => Event::LinSyncError(LinSyncError::read(cursor, header)?),
        ObjectType::LinBaudrate => Event::LinBaudrate(LinBaudrate::read(cursor, header)?),
        ObjectType::LinSleep => Event::LinSleep(LinSleep::read(cursor, header)?),
        ObjectType::LinWakeup => Event::LinWakeup(LinWakeup::read(cursor, header)?),
        ObjectType::LinUnexpectedWakeup => Event::LinUnexpectedWakeup(LinUnexpectedWakeup::read(cursor, header)?),
        ObjectType::LinDlcInfo => Event::LinDlcInfo(LinDlcInfo::read(cursor, header)?),
        ObjectType::LinChecksumInfo => Event::LinChecksumInfo(LinChecksumInfo::read(cursor, header)?),
        ObjectType::LinSpikeEvent => Event::LinSpikeEvent(LinSpikeEvent::read(cursor, header)?),
        ObjectType::LinLongDomSig => Event::LinLongDomSig(LinLongDomSig::read(cursor, header)?),
        ObjectType::LinDisturbanceEvent => Event::LinDisturbanceEvent(LinDisturbanceEvent::read(cursor, header)?),
        ObjectType::LinShortOrSlowResponse => Event::LinShortOrSlowResponse(LinShortOrSlowResponse::read(cursor, header)?),
        ObjectType::LinStatistic => Event::LinStatistic(LinStatistic::read(cursor, header)?),
        ObjectType::LinSyncError2 => Event::LinSyncError2(LinSyncError2::read(cursor, header)?),
        ObjectType::LinCrcError2 => {
            let remaining = declared_body_len(&header);
            Event::LinCrcError2(LinCrcError2::read(cursor, header, remaining)?)
        }
        ObjectType::LinReceiveError2 => {
            let remaining = declared_body_len(&header);
            Event::LinReceiveError2(LinReceiveError2::read(cursor, header, remaining)?)
        }
        ObjectType::LinSendError2 => {
            let remaining = declared_body_len(&header);
            Event::LinSendError2(LinSendError2::read(cursor, header, remaining)?)
        }
        ObjectType::LinWakeup2 => Event::LinWakeup2(LinWakeup2::read(cursor, header)?),
        ObjectType::LinSpikeEvent2 => Event::LinSpikeEvent2(LinSpikeEvent2::read(cursor, header)?),
        ObjectType::LinLongDomSig2 => Event::LinLongDomSig2(LinLongDomSig2::read(cursor, header)?),
        ObjectType::LinShortOrSlowResponse2 => Event::LinShortOrSlowResponse2(LinShortOrSlowResponse2::read(cursor, header)?),

        ObjectType::MostSpy => Event::MostSpy(MostSpy::read(cursor, header)?),
        ObjectType::MostCtrl => Event::MostCtrl(MostCtrl::read(cursor, header)?),
        ObjectType::MostPkt => Event::MostPkt(MostPkt::read(cursor, header)?),
        ObjectType::MostPkt2 => Event::MostPkt2(MostPkt2::read(cursor, header)?),
        ObjectType::MostLightLock => Event::MostLightLock(MostLightLock::read(cursor, header)?),
        ObjectType::MostStatistic => Event::MostStatistic(MostStatistic::read(cursor, header)?),
        ObjectType::MostHwMode => Event::MostHwMode(MostHwMode::read(cursor, header)?),
        ObjectType::MostReg => Event::MostReg(MostReg::read(cursor, header)?),
        ObjectType::MostGenReg => Event::MostGenReg(MostGenReg::read(cursor, header)?),
        ObjectType::MostNetState => Event::MostNetState(MostNetState::read(cursor, header)?),
        ObjectType::MostDataLost => Event::MostDataLost(MostDataLost::read(cursor, header)?),
        ObjectType::MostTrigger => Event::MostTrigger(MostTrigger::read(cursor, header)?),
        ObjectType::MostStatisticEx => Event::MostStatisticEx(MostStatisticEx::read(cursor, header)?),
        ObjectType::MostTxLight => Event::MostTxLight(MostTxLight::read(cursor, header)?),
        ObjectType::MostAllocTab => Event::MostAllocTab(MostAllocTab::read(cursor, header)?),
        ObjectType::MostStress => Event::MostStress(MostStress::read(cursor, header)?),
        ObjectType::Most150Message => Event::Most150Message(Most150Message::read(cursor, header)?),
        ObjectType::Most150Pkt => Event::Most150Pkt(Most150Pkt::read(cursor, header)?),
        ObjectType::MostEthernetPkt => Event::MostEthernetPkt(MostEthernetPkt::read(cursor, header)?),
        ObjectType::Most150MessageFragment => Event::Most150MessageFragment(Most150MessageFragment::read(cursor, header)?),
        ObjectType::Most150PktFragment => Event::Most150PktFragment(Most150PktFragment::read(cursor, header)?),
        ObjectType::MostEthernetPktFragment => Event::MostEthernetPktFragment(MostEthernetPktFragment::read(cursor, header)?),
        ObjectType::MostSystemEvent => Event::MostSystemEvent(MostSystemEvent::read(cursor, header)?),
        ObjectType::Most150AllocTab => Event::Most150AllocTab(Most150AllocTab::read(cursor, header)?),
        ObjectType::Most50Message => Event::Most50Message(Most50Message::read(cursor, header)?),
        ObjectType::Most50Pkt => Event::Most50Pkt(Most50Pkt::read(cursor, header)?),
        ObjectType::MostEcl => Event::MostEcl(MostEcl::read(cursor, header)?),

        ObjectType::FlexRayData => Event::FlexRayData(FlexRayData::read(cursor, header)?),
        ObjectType::FlexRaySync => Event::FlexRaySync(FlexRaySync::read(cursor, header)?),
        ObjectType::FlexRayMessage => Event::FlexRayV6Message(FlexRayV6Message::read(cursor, header)?),
        ObjectType::FlexRayCycle => Event::FlexRayV6StartCycleEvent(FlexRayV6StartCycleEvent::read(cursor, header)?),
        ObjectType::FlexRayStatus => Event::FlexRayStatusEvent(FlexRayStatusEvent::read(cursor, header)?),
        ObjectType::FrRcvMessage => Event::FlexRayVFrReceiveMsg(FlexRayVFrReceiveMsg::read(cursor, header)?),
        ObjectType::FrRcvMessageEx => {
            let remaining = declared_body_len(&header);
            Event::FlexRayVFrReceiveMsgEx(FlexRayVFrReceiveMsgEx::read(cursor, header, remaining)?)
        }
        ObjectType::FrError => Event::FlexRayVFrError(FlexRayVFrError::read(cursor, header)?),
        ObjectType::FrStatus => Event::FlexRayVFrStatus(FlexRayVFrStatus::read(cursor, header)?),
        ObjectType::FrStartCycle => Event::FlexRayVFrStartCycle(FlexRayVFrStartCycle::read(cursor, header)?),

        ObjectType::EthernetFrame => Event::EthernetFrame(Box::new(EthernetFrame::read(cursor, header)?)),
        ObjectType::EthernetRxError => Event::EthernetRxError(EthernetRxError::read(cursor, header)?),
        ObjectType::EthernetStatus => Event::EthernetStatus(EthernetStatus::read(cursor, header)?),
        ObjectType::EthernetStatistic => Event::EthernetStatistic(EthernetStatistic::read(cursor, header)?),
        ObjectType::EthernetFrameEx => Event::EthernetFrameEx(EthernetFrameEvent::read(cursor, header)?),
        ObjectType::EthernetFrameForwarded => Event::EthernetFrameForwarded(EthernetFrameEvent::read(cursor, header)?),
        ObjectType::EthernetErrorEx => Event::EthernetErrorEx(EthernetFrameEvent::read(cursor, header)?),
        ObjectType::EthernetErrorForwarded => Event::EthernetErrorForwarded(EthernetFrameEvent::read(cursor, header)?),

        ObjectType::AfdxFrame => Event::AfdxFrame(AfdxFrame::read(cursor, header)?),
        ObjectType::AfdxStatistic => Event::AfdxStatistic(AfdxStatistic::read(cursor, header)?),
        ObjectType::AfdxStatus => Event::AfdxStatus(AfdxStatus::read(cursor, header)?),
        ObjectType::AfdxBusStatistic => Event::AfdxBusStatistic(AfdxBusStatistic::read(cursor, header)?),
        ObjectType::AfdxErrorEvent => Event::AfdxErrorEvent(AfdxErrorEvent::read(cursor, header)?),

        ObjectType::A429Message => Event::A429Message(A429Message::read(cursor, header)?),
        ObjectType::A429Error => Event::A429Error(A429Error::read(cursor, header)?),
        ObjectType::A429Status => Event::A429Status(A429Status::read(cursor, header)?),
        ObjectType::A429BusStatistic => Event::A429BusStatistic(A429BusStatistic::read(cursor, header)?),

        ObjectType::GpsEvent => Event::GpsEvent(GpsEvent::read(cursor, header)?),
        ObjectType::J1708Message => Event::J1708Message(J1708Message::read(cursor, header)?),
        ObjectType::J1708VirtualMsg => Event::J1708VirtualMsg(J1708Message::read(cursor, header)?),
        ObjectType::WlanFrame => Event::WlanFrame(WlanFrame::read(cursor, header)?),
        ObjectType::WlanStatistic => Event::WlanStatistic(WlanStatistic::read(cursor, header)?),
        ObjectType::KlineStatusEvent => Event::KlineStatusEvent(KlineStatusEvent::read(cursor, header)?),

        ObjectType::AppTrigger => Event::AppTrigger(AppTrigger::read(cursor, header)?),
        ObjectType::EnvInteger => Event::EnvironmentVariable(EnvironmentVariable::read_integer(cursor, header)?),
        ObjectType::EnvDouble => Event::EnvironmentVariable(EnvironmentVariable::read_double(cursor, header)?),
        ObjectType::EnvString => Event::EnvironmentVariable(EnvironmentVariable::read_string(cursor, header)?),
        ObjectType::EnvData => Event::EnvironmentVariable(EnvironmentVariable::read_data(cursor, header)?),
        ObjectType::RealtimeClock => Event::RealtimeClock(RealtimeClock::read(cursor, header)?),
        ObjectType::AppText => Event::AppText(AppText::read(cursor, header)?),
        ObjectType::SysVariable => Event::SysVariable(SysVariable::read(cursor, header)?),
        ObjectType::EventComment => Event::EventComment(EventComment::read(cursor, header)?),
        ObjectType::GlobalMarker => Event::GlobalMarker(GlobalMarker::read(cursor, header)?),
        ObjectType::SerialEvent => Event::SerialEvent(SerialEvent::read(cursor, header)?),
        ObjectType::OverrunError => Event::OverrunError(OverrunError::read(cursor, header)?),
        ObjectType::TestStructure => Event::TestStructure(TestStructure::read(cursor, header)?),
        ObjectType::DiagRequestInterpretation => Event::DiagRequestInterpretation(DiagRequestInterpretation::read(cursor, header)?),
        ObjectType::Unknown115 => Event::Unknown115(Unknown115::read(cursor, header)?),

        ObjectType::LogContainer => return Err(BlfError::ContainerExpected(u32::from(object_type))),
        ObjectType::Unknown | ObjectType::Other(_) => return Ok(None),
        reserved if reserved.is_reserved_or_unknown() => return Ok(None),
    };
    Ok(Some(event))
}

/// Computes the base header's `objectSize` without allocating a full encode
/// buffer; used by callers that need to know how much room an event will take.
pub fn calculate_object_size(event: &Event) -> u32 {
    let header = event.header();
    let header_size = header.calculate_header_size() as u32;
    let body_len = for_each_arm!(event, e => e.body_len());
    header_size + body_len
}

/// Reads the object header (both stages) and dispatches to the right decoder,
/// honoring the on-disk `header_version` rather than any nominal expectation
/// the tag's catalogue entry might otherwise carry (`SPEC_FULL.md` Open Questions).
/// Returns the decoded event (or `None` for a skipped reserved tag) and the
/// absolute cursor position following this object's declared `object_size`,
/// aligned up to the next 4-byte boundary.
pub fn read_object(cursor: &mut Cursor<&[u8]>) -> Result<(Option<Event>, u64)> {
    let start = cursor.position();
    let base = ObjectHeaderBase::read(cursor)?;
    let end = start + base.object_size as u64;

    if base.object_type == ObjectType::LogContainer {
        return Err(BlfError::ContainerExpected(u32::from(base.object_type)));
    }

    let header = ObjectHeader::read(cursor, base)?;
    let event = decode_body(cursor, header)?;

    let consumed = cursor.position();
    if consumed > end {
        return Err(BlfError::TruncatedPayload {
            declared: (consumed - start) as usize,
            remaining: (end - start) as usize,
        });
    }
    let aligned_end = codec::align4(end - start) + start;
    Ok((event, aligned_end.max(consumed)))
}
