//! The `ObjectType` tag enumeration.
//!
//! Numbering follows the object-construction dispatch in the reference
//! implementation's `File::createObject`, which enumerates every tag in
//! declaration order starting at `Unknown = 0`. See `DESIGN.md` for the
//! reconciliation against this crate's distilled requirements document,
//! whose prose tag hints are occasionally approximate.

#![allow(non_camel_case_types)]

/// Identifies the concrete shape of one on-disk event object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    #[default]
    Unknown,
    CanMessage,
    CanErrorFrame,
    CanOverloadFrame,
    CanDriverStatistic,
    AppTrigger,
    EnvInteger,
    EnvDouble,
    EnvString,
    EnvData,
    LogContainer,
    LinMessage,
    LinCrcError,
    LinDlcInfo,
    LinReceiveError,
    LinSendError,
    LinSlaveTimeout,
    LinSchedulerModeChange,
    LinSyncError,
    LinBaudrate,
    LinSleep,
    LinWakeup,
    MostSpy,
    MostCtrl,
    MostLightLock,
    MostStatistic,
    Reserved26,
    Reserved27,
    Reserved28,
    FlexRayData,
    FlexRaySync,
    CanDriverError,
    MostPkt,
    MostPkt2,
    MostHwMode,
    MostReg,
    MostGenReg,
    MostNetState,
    MostDataLost,
    MostTrigger,
    FlexRayCycle,
    FlexRayMessage,
    LinChecksumInfo,
    LinSpikeEvent,
    CanDriverSync,
    FlexRayStatus,
    GpsEvent,
    FrError,
    FrStatus,
    FrStartCycle,
    FrRcvMessage,
    RealtimeClock,
    Reserved52,
    Reserved53,
    LinStatistic,
    J1708Message,
    J1708VirtualMsg,
    LinMessage2,
    LinSendError2,
    LinSyncError2,
    LinCrcError2,
    LinReceiveError2,
    LinWakeup2,
    LinSpikeEvent2,
    LinLongDomSig,
    AppText,
    FrRcvMessageEx,
    MostStatisticEx,
    MostTxLight,
    MostAllocTab,
    MostStress,
    EthernetFrame,
    SysVariable,
    CanErrorExt,
    CanDriverErrorExt,
    LinLongDomSig2,
    Most150Message,
    Most150Pkt,
    MostEthernetPkt,
    Most150MessageFragment,
    Most150PktFragment,
    MostEthernetPktFragment,
    MostSystemEvent,
    Most150AllocTab,
    Most50Message,
    Most50Pkt,
    CanMessage2,
    LinUnexpectedWakeup,
    LinShortOrSlowResponse,
    LinDisturbanceEvent,
    SerialEvent,
    OverrunError,
    EventComment,
    WlanFrame,
    WlanStatistic,
    MostEcl,
    GlobalMarker,
    AfdxFrame,
    AfdxStatistic,
    KlineStatusEvent,
    CanFdMessage,
    CanFdMessage64,
    EthernetRxError,
    EthernetStatus,
    CanFdErrorFrame64,
    LinShortOrSlowResponse2,
    AfdxStatus,
    AfdxBusStatistic,
    Reserved108,
    AfdxErrorEvent,
    A429Error,
    A429Status,
    A429BusStatistic,
    A429Message,
    EthernetStatistic,
    Unknown115,
    Reserved116,
    Reserved117,
    TestStructure,
    DiagRequestInterpretation,
    EthernetFrameEx,
    EthernetFrameForwarded,
    EthernetErrorEx,
    EthernetErrorForwarded,
    /// A tag value newer than this catalogue knows about. Carried so that
    /// unfamiliar producers round-trip instead of becoming lossy.
    Other(u32),
}

impl ObjectType {
    /// Tags in this range (and the nominal `Unknown` = 0) are never errors:
    /// the catalogue dispatch skips their payload without decoding it.
    pub fn is_reserved_or_unknown(self) -> bool {
        matches!(
            self,
            ObjectType::Unknown
                | ObjectType::Reserved26
                | ObjectType::Reserved27
                | ObjectType::Reserved28
                | ObjectType::Reserved52
                | ObjectType::Reserved53
                | ObjectType::Reserved108
                | ObjectType::Reserved116
                | ObjectType::Reserved117
                | ObjectType::Other(_)
        )
    }
}

const TABLE: &[(u32, ObjectType)] = &[
    (0, ObjectType::Unknown),
    (1, ObjectType::CanMessage),
    (2, ObjectType::CanErrorFrame),
    (3, ObjectType::CanOverloadFrame),
    (4, ObjectType::CanDriverStatistic),
    (5, ObjectType::AppTrigger),
    (6, ObjectType::EnvInteger),
    (7, ObjectType::EnvDouble),
    (8, ObjectType::EnvString),
    (9, ObjectType::EnvData),
    (10, ObjectType::LogContainer),
    (11, ObjectType::LinMessage),
    (12, ObjectType::LinCrcError),
    (13, ObjectType::LinDlcInfo),
    (14, ObjectType::LinReceiveError),
    (15, ObjectType::LinSendError),
    (16, ObjectType::LinSlaveTimeout),
    (17, ObjectType::LinSchedulerModeChange),
    (18, ObjectType::LinSyncError),
    (19, ObjectType::LinBaudrate),
    (20, ObjectType::LinSleep),
    (21, ObjectType::LinWakeup),
    (22, ObjectType::MostSpy),
    (23, ObjectType::MostCtrl),
    (24, ObjectType::MostLightLock),
    (25, ObjectType::MostStatistic),
    (26, ObjectType::Reserved26),
    (27, ObjectType::Reserved27),
    (28, ObjectType::Reserved28),
    (29, ObjectType::FlexRayData),
    (30, ObjectType::FlexRaySync),
    (31, ObjectType::CanDriverError),
    (32, ObjectType::MostPkt),
    (33, ObjectType::MostPkt2),
    (34, ObjectType::MostHwMode),
    (35, ObjectType::MostReg),
    (36, ObjectType::MostGenReg),
    (37, ObjectType::MostNetState),
    (38, ObjectType::MostDataLost),
    (39, ObjectType::MostTrigger),
    (40, ObjectType::FlexRayCycle),
    (41, ObjectType::FlexRayMessage),
    (42, ObjectType::LinChecksumInfo),
    (43, ObjectType::LinSpikeEvent),
    (44, ObjectType::CanDriverSync),
    (45, ObjectType::FlexRayStatus),
    (46, ObjectType::GpsEvent),
    (47, ObjectType::FrError),
    (48, ObjectType::FrStatus),
    (49, ObjectType::FrStartCycle),
    (50, ObjectType::FrRcvMessage),
    (51, ObjectType::RealtimeClock),
    (52, ObjectType::Reserved52),
    (53, ObjectType::Reserved53),
    (54, ObjectType::LinStatistic),
    (55, ObjectType::J1708Message),
    (56, ObjectType::J1708VirtualMsg),
    (57, ObjectType::LinMessage2),
    (58, ObjectType::LinSendError2),
    (59, ObjectType::LinSyncError2),
    (60, ObjectType::LinCrcError2),
    (61, ObjectType::LinReceiveError2),
    (62, ObjectType::LinWakeup2),
    (63, ObjectType::LinSpikeEvent2),
    (64, ObjectType::LinLongDomSig),
    (65, ObjectType::AppText),
    (66, ObjectType::FrRcvMessageEx),
    (67, ObjectType::MostStatisticEx),
    (68, ObjectType::MostTxLight),
    (69, ObjectType::MostAllocTab),
    (70, ObjectType::MostStress),
    (71, ObjectType::EthernetFrame),
    (72, ObjectType::SysVariable),
    (73, ObjectType::CanErrorExt),
    (74, ObjectType::CanDriverErrorExt),
    (75, ObjectType::LinLongDomSig2),
    (76, ObjectType::Most150Message),
    (77, ObjectType::Most150Pkt),
    (78, ObjectType::MostEthernetPkt),
    (79, ObjectType::Most150MessageFragment),
    (80, ObjectType::Most150PktFragment),
    (81, ObjectType::MostEthernetPktFragment),
    (82, ObjectType::MostSystemEvent),
    (83, ObjectType::Most150AllocTab),
    (84, ObjectType::Most50Message),
    (85, ObjectType::Most50Pkt),
    (86, ObjectType::CanMessage2),
    (87, ObjectType::LinUnexpectedWakeup),
    (88, ObjectType::LinShortOrSlowResponse),
    (89, ObjectType::LinDisturbanceEvent),
    (90, ObjectType::SerialEvent),
    (91, ObjectType::OverrunError),
    (92, ObjectType::EventComment),
    (93, ObjectType::WlanFrame),
    (94, ObjectType::WlanStatistic),
    (95, ObjectType::MostEcl),
    (96, ObjectType::GlobalMarker),
    (97, ObjectType::AfdxFrame),
    (98, ObjectType::AfdxStatistic),
    (99, ObjectType::KlineStatusEvent),
    (100, ObjectType::CanFdMessage),
    (101, ObjectType::CanFdMessage64),
    (102, ObjectType::EthernetRxError),
    (103, ObjectType::EthernetStatus),
    (104, ObjectType::CanFdErrorFrame64),
    (105, ObjectType::LinShortOrSlowResponse2),
    (106, ObjectType::AfdxStatus),
    (107, ObjectType::AfdxBusStatistic),
    (108, ObjectType::Reserved108),
    (109, ObjectType::AfdxErrorEvent),
    (110, ObjectType::A429Error),
    (111, ObjectType::A429Status),
    (112, ObjectType::A429BusStatistic),
    (113, ObjectType::A429Message),
    (114, ObjectType::EthernetStatistic),
    (115, ObjectType::Unknown115),
    (116, ObjectType::Reserved116),
    (117, ObjectType::Reserved117),
    (118, ObjectType::TestStructure),
    (119, ObjectType::DiagRequestInterpretation),
    (120, ObjectType::EthernetFrameEx),
    (121, ObjectType::EthernetFrameForwarded),
    (122, ObjectType::EthernetErrorEx),
    (123, ObjectType::EthernetErrorForwarded),
];

impl From<u32> for ObjectType {
    fn from(value: u32) -> Self {
        TABLE
            .iter()
            .find(|(tag, _)| *tag == value)
            .map(|(_, ty)| *ty)
            .unwrap_or(ObjectType::Other(value))
    }
}

impl From<ObjectType> for u32 {
    fn from(ty: ObjectType) -> Self {
        match ty {
            ObjectType::Other(value) => value,
            known => TABLE
                .iter()
                .find(|(_, t)| *t == known)
                .map(|(tag, _)| *tag)
                .expect("every non-Other ObjectType variant is in TABLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_table_entry() {
        for &(tag, ty) in TABLE {
            assert_eq!(u32::from(ty), tag);
            assert_eq!(ObjectType::from(tag), ty);
        }
    }

    #[test]
    fn unfamiliar_tag_is_other_not_an_error() {
        let ty = ObjectType::from(9001);
        assert_eq!(ty, ObjectType::Other(9001));
        assert!(ty.is_reserved_or_unknown());
    }

    #[test]
    fn known_test_fixture_tags() {
        assert_eq!(ObjectType::from(54), ObjectType::LinStatistic);
        assert_eq!(ObjectType::from(77), ObjectType::Most150Pkt);
        assert_eq!(ObjectType::from(121), ObjectType::EthernetFrameForwarded);
    }
}
