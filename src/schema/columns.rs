//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Pstscan.
//
// Pstscan is free software: you can  redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Pstscan is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Pstscan. If not, see <http://www.gnu.org/licenses/>.

use super::enums;
use super::{ColumnDef, ColumnKey, ColumnType, FieldDef, PropSource};
use crate::mapi::{named, tags};

use self::ColumnType::*;
use self::PropSource::{Derived, Named, Stream, Tag};

const RECIPIENT: ColumnType = Struct(RecipientField::FIELDS);
const ATTACHMENT: ColumnType = Struct(AttachmentField::FIELDS);
const ONE_OFF: ColumnType = Struct(OneOffField::FIELDS);

column_set! {
    /// Columns describing the archive file a row came from.
    pub enum FileColumn: File {
        PstPath => "pst_path", Varchar, Derived;
        PstName => "pst_name", Varchar, Tag(tags::DISPLAY_NAME);
        RecordKey => "record_key", Blob, Tag(tags::RECORD_KEY);
    }
}

column_set! {
    pub enum NodeColumn: Node {
        NodeId => "node_id", UInteger, Derived;
        ParentNodeId => "parent_node_id", UInteger, Derived;
    }
}

column_set! {
    /// Columns every folder and message has.
    pub enum CommonColumn: Common {
        DisplayName => "display_name", Varchar, Tag(tags::DISPLAY_NAME);
        Comment => "comment", Varchar, Tag(tags::COMMENT);
        CreationTime => "creation_time", TimestampSec,
            Tag(tags::CREATION_TIME);
        LastModified => "last_modified", TimestampSec,
            Tag(tags::LAST_MODIFICATION_TIME);
    }
}

column_set! {
    pub enum FolderColumn: Folder {
        ContainerClass => "container_class", Varchar,
            Tag(tags::CONTAINER_CLASS);
        SubfolderCount => "subfolder_count", UInteger, Derived;
        MessageCount => "message_count", BigInt, Tag(tags::CONTENT_COUNT);
        UnreadMessageCount => "unread_message_count", BigInt,
            Tag(tags::CONTENT_UNREAD);
    }
}

column_set! {
    /// Columns every message has, whatever its class.
    pub enum MessageColumn: Message {
        Subject => "subject", Varchar, Tag(tags::SUBJECT);
        SenderName => "sender_name", Varchar, Tag(tags::SENDER_NAME);
        SenderEmailAddress => "sender_email_address", Varchar,
            Tag(tags::SENDER_EMAIL_ADDRESS);
        MessageDeliveryTime => "message_delivery_time", TimestampSec,
            Tag(tags::MESSAGE_DELIVERY_TIME);
        MessageClass => "message_class", Varchar, Tag(tags::MESSAGE_CLASS);
        Importance => "importance", Enum(&enums::IMPORTANCE),
            Tag(tags::IMPORTANCE);
        Priority => "priority", Enum(&enums::PRIORITY), Tag(tags::PRIORITY);
        Sensitivity => "sensitivity", Enum(&enums::SENSITIVITY),
            Tag(tags::SENSITIVITY);
        MessageFlags => "message_flags", Integer, Tag(tags::MESSAGE_FLAGS);
        MessageSize => "message_size", UBigInt, Tag(tags::MESSAGE_SIZE);
        HasAttachments => "has_attachments", Boolean, Derived;
        AttachmentCount => "attachment_count", UInteger, Derived;
        Body => "body", Varchar, Stream(tags::BODY);
        BodyHtml => "body_html", Varchar, Stream(tags::BODY_HTML);
        InternetMessageId => "internet_message_id", Varchar,
            Tag(tags::INTERNET_MESSAGE_ID);
        ConversationTopic => "conversation_topic", Varchar,
            Tag(tags::CONVERSATION_TOPIC);
        Recipients => "recipients", List(&RECIPIENT), Derived;
        Attachments => "attachments", List(&ATTACHMENT), Derived;
    }
}

field_set! {
    /// Fields of each element of a message's `recipients`.
    pub enum RecipientField {
        DisplayName => "display_name", Varchar, Tag(tags::DISPLAY_NAME);
        AccountName => "account_name", Varchar, Tag(tags::ACCOUNT);
        EmailAddress => "email_address", Varchar, Tag(tags::EMAIL_ADDRESS);
        AddressType => "address_type", Varchar, Tag(tags::ADDRESS_TYPE);
        RecipientType => "recipient_type", Enum(&enums::RECIPIENT_TYPE),
            Tag(tags::RECIPIENT_TYPE);
        RecipientTypeRaw => "recipient_type_raw", Integer,
            Tag(tags::RECIPIENT_TYPE);
    }
}

field_set! {
    /// Fields of each element of a message's `attachments`.
    pub enum AttachmentField {
        ContentId => "content_id", Varchar, Tag(tags::ATTACH_CONTENT_ID);
        AttachMethod => "attach_method", Enum(&enums::ATTACH_METHOD),
            Tag(tags::ATTACH_METHOD);
        Filename => "filename", Varchar, Tag(tags::ATTACH_FILENAME);
        LongFilename => "long_filename", Varchar,
            Tag(tags::ATTACH_LONG_FILENAME);
        Extension => "extension", Varchar, Tag(tags::ATTACH_EXTENSION);
        MimeType => "mime_type", Varchar, Tag(tags::ATTACH_MIME_TAG);
        Size => "size", UBigInt, Derived;
        IsMessage => "is_message", Boolean, Derived;
        Bytes => "bytes", Blob, Derived;
    }
}

field_set! {
    /// Fields of each element of a distribution list's `one_off_members`.
    pub enum OneOffField {
        DisplayName => "display_name", Varchar, Derived;
        AddressType => "address_type", Varchar, Derived;
        EmailAddress => "email_address", Varchar, Derived;
    }
}

column_set! {
    pub enum ContactColumn: Contact {
        AccountName => "account_name", Varchar, Tag(tags::ACCOUNT);
        CallbackNumber => "callback_number", Varchar,
            Tag(tags::CALLBACK_TELEPHONE_NUMBER);
        ConversationProhibited => "conversation_prohibited", Boolean,
            Tag(tags::CONVERSION_PROHIBITED);
        DiscloseRecipients => "disclose_recipients", Boolean,
            Tag(tags::DISCLOSE_RECIPIENTS);
        GenerationSuffix => "generation_suffix", Varchar,
            Tag(tags::GENERATION);
        GivenName => "given_name", Varchar, Tag(tags::GIVEN_NAME);
        GovernmentIdNumber => "government_id_number", Varchar,
            Tag(tags::GOVERNMENT_ID_NUMBER);
        BusinessTelephone => "business_telephone", Varchar,
            Tag(tags::BUSINESS_TELEPHONE_NUMBER);
        HomeTelephone => "home_telephone", Varchar,
            Tag(tags::HOME_TELEPHONE_NUMBER);
        Initials => "initials", Varchar, Tag(tags::INITIALS);
        Keyword => "keyword", Varchar, Tag(tags::KEYWORD);
        Language => "language", Varchar, Tag(tags::LANGUAGE);
        Location => "location", Varchar, Tag(tags::LOCATION);
        MailPermission => "mail_permission", Boolean,
            Tag(tags::MAIL_PERMISSION);
        MhsCommonName => "mhs_common_name", Varchar,
            Tag(tags::MHS_COMMON_NAME);
        OrganizationalIdNumber => "organizational_id_number", Varchar,
            Tag(tags::ORGANIZATIONAL_ID_NUMBER);
        Surname => "surname", Varchar, Tag(tags::SURNAME);
        OriginalDisplayName => "original_display_name", Varchar,
            Tag(tags::ORIGINAL_DISPLAY_NAME);
        PostalAddress => "postal_address", Varchar, Tag(tags::POSTAL_ADDRESS);
        CompanyName => "company_name", Varchar, Tag(tags::COMPANY_NAME);
        Title => "title", Varchar, Tag(tags::TITLE);
        DepartmentName => "department_name", Varchar,
            Tag(tags::DEPARTMENT_NAME);
        OfficeLocation => "office_location", Varchar,
            Tag(tags::OFFICE_LOCATION);
        PrimaryTelephone => "primary_telephone", Varchar,
            Tag(tags::PRIMARY_TELEPHONE_NUMBER);
        BusinessTelephone2 => "business_telephone_2", Varchar,
            Tag(tags::BUSINESS2_TELEPHONE_NUMBER);
        MobileTelephone => "mobile_telephone", Varchar,
            Tag(tags::MOBILE_TELEPHONE_NUMBER);
        RadioTelephone => "radio_telephone", Varchar,
            Tag(tags::RADIO_TELEPHONE_NUMBER);
        CarTelephone => "car_telephone", Varchar,
            Tag(tags::CAR_TELEPHONE_NUMBER);
        OtherTelephone => "other_telephone", Varchar,
            Tag(tags::OTHER_TELEPHONE_NUMBER);
        TransmittableDisplayName => "transmittable_display_name", Varchar,
            Tag(tags::TRANSMITTABLE_DISPLAY_NAME);
        PagerTelephone => "pager_telephone", Varchar,
            Tag(tags::PAGER_TELEPHONE_NUMBER);
        PrimaryFax => "primary_fax", Varchar, Tag(tags::PRIMARY_FAX_NUMBER);
        BusinessFax => "business_fax", Varchar,
            Tag(tags::BUSINESS_FAX_NUMBER);
        HomeFax => "home_fax", Varchar, Tag(tags::HOME_FAX_NUMBER);
        BusinessAddressCountry => "business_address_country", Varchar,
            Tag(tags::COUNTRY);
        BusinessAddressCity => "business_address_city", Varchar,
            Tag(tags::LOCALITY);
        BusinessAddressState => "business_address_state", Varchar,
            Tag(tags::STATE_OR_PROVINCE);
        BusinessAddressStreet => "business_address_street", Varchar,
            Tag(tags::STREET_ADDRESS);
        BusinessPostalCode => "business_postal_code", Varchar,
            Tag(tags::POSTAL_CODE);
        BusinessPoBox => "business_po_box", Varchar,
            Tag(tags::POST_OFFICE_BOX);
        TelexNumber => "telex_number", Varchar, Tag(tags::TELEX_NUMBER);
        IsdnNumber => "isdn_number", Varchar, Tag(tags::ISDN_NUMBER);
        AssistantTelephone => "assistant_telephone", Varchar,
            Tag(tags::ASSISTANT_TELEPHONE_NUMBER);
        HomeTelephone2 => "home_telephone_2", Varchar,
            Tag(tags::HOME2_TELEPHONE_NUMBER);
        Assistant => "assistant", Varchar, Tag(tags::ASSISTANT);
        SendRichInfo => "send_rich_info", Boolean, Tag(tags::SEND_RICH_INFO);
        WeddingAnniversary => "wedding_anniversary", TimestampSec,
            Tag(tags::WEDDING_ANNIVERSARY);
        Birthday => "birthday", TimestampSec, Tag(tags::BIRTHDAY);
        Hobbies => "hobbies", Varchar, Tag(tags::HOBBIES);
        MiddleName => "middle_name", Varchar, Tag(tags::MIDDLE_NAME);
        DisplayNamePrefix => "display_name_prefix", Varchar,
            Tag(tags::DISPLAY_NAME_PREFIX);
        Profession => "profession", Varchar, Tag(tags::PROFESSION);
        ReferredByName => "referred_by_name", Varchar,
            Tag(tags::REFERRED_BY_NAME);
        SpouseName => "spouse_name", Varchar, Tag(tags::SPOUSE_NAME);
        ComputerNetworkName => "computer_network_name", Varchar,
            Tag(tags::COMPUTER_NETWORK_NAME);
        CustomerId => "customer_id", Varchar, Tag(tags::CUSTOMER_ID);
        TtytddPhone => "ttytdd_phone", Varchar,
            Tag(tags::TTYTDD_PHONE_NUMBER);
        FtpSite => "ftp_site", Varchar, Tag(tags::FTP_SITE);
        Gender => "gender", SmallInt, Tag(tags::GENDER);
        ManagerName => "manager_name", Varchar, Tag(tags::MANAGER_NAME);
        Nickname => "nickname", Varchar, Tag(tags::NICKNAME);
        PersonalHomePage => "personal_home_page", Varchar,
            Tag(tags::PERSONAL_HOME_PAGE);
        BusinessHomePage => "business_home_page", Varchar,
            Tag(tags::BUSINESS_HOME_PAGE);
        CompanyMainPhone => "company_main_phone", Varchar,
            Tag(tags::COMPANY_MAIN_PHONE_NUMBER);
        ChildrensNames => "childrens_names", Varchar,
            Tag(tags::CHILDRENS_NAMES);
        HomeAddressCity => "home_address_city", Varchar,
            Tag(tags::HOME_ADDRESS_CITY);
        HomeAddressCountry => "home_address_country", Varchar,
            Tag(tags::HOME_ADDRESS_COUNTRY);
        HomeAddressPostalCode => "home_address_postal_code", Varchar,
            Tag(tags::HOME_ADDRESS_POSTAL_CODE);
        HomeAddressState => "home_address_state", Varchar,
            Tag(tags::HOME_ADDRESS_STATE_OR_PROVINCE);
        HomeAddressStreet => "home_address_street", Varchar,
            Tag(tags::HOME_ADDRESS_STREET);
        HomeAddressPoBox => "home_address_po_box", Varchar,
            Tag(tags::HOME_ADDRESS_POST_OFFICE_BOX);
        OtherAddressCity => "other_address_city", Varchar,
            Tag(tags::OTHER_ADDRESS_CITY);
        OtherAddressCountry => "other_address_country", Varchar,
            Tag(tags::OTHER_ADDRESS_COUNTRY);
        OtherAddressPostalCode => "other_address_postal_code", Varchar,
            Tag(tags::OTHER_ADDRESS_POSTAL_CODE);
        OtherAddressState => "other_address_state", Varchar,
            Tag(tags::OTHER_ADDRESS_STATE_OR_PROVINCE);
        OtherAddressStreet => "other_address_street", Varchar,
            Tag(tags::OTHER_ADDRESS_STREET);
        OtherAddressPoBox => "other_address_po_box", Varchar,
            Tag(tags::OTHER_ADDRESS_POST_OFFICE_BOX);
    }
}

column_set! {
    pub enum AppointmentColumn: Appointment {
        Location => "location", Varchar, Named(named::LOCATION);
        StartTime => "start_time", TimestampSec,
            Named(named::APPOINTMENT_START_WHOLE);
        EndTime => "end_time", TimestampSec,
            Named(named::APPOINTMENT_END_WHOLE);
        Duration => "duration", Integer, Named(named::APPOINTMENT_DURATION);
        AllDayEvent => "all_day_event", Boolean,
            Named(named::APPOINTMENT_SUB_TYPE);
        BusyStatus => "busy_status", Integer, Named(named::BUSY_STATUS);
        MeetingWorkspaceUrl => "meeting_workspace_url", Varchar,
            Named(named::MEETING_WORKSPACE_URL);
        OrganizerName => "organizer_name", Varchar,
            Tag(tags::SENT_REPRESENTING_NAME);
        RequiredAttendees => "required_attendees", Varchar,
            Named(named::TO_ATTENDEES_STRING);
        OptionalAttendees => "optional_attendees", Varchar,
            Named(named::CC_ATTENDEES_STRING);
        IsRecurring => "is_recurring", Boolean, Named(named::RECURRING);
        RecurrencePattern => "recurrence_pattern", Varchar,
            Named(named::RECURRENCE_PATTERN);
        IsPrivate => "is_private", Boolean, Derived;
        ResponseStatus => "response_status", Integer,
            Named(named::RESPONSE_STATUS);
        IsMeeting => "is_meeting", Boolean, Named(named::FINVITED);
    }
}

column_set! {
    pub enum StickyNoteColumn: StickyNote {
        NoteColor => "note_color", Integer, Named(named::NOTE_COLOR);
        NoteWidth => "note_width", Integer, Named(named::NOTE_WIDTH);
        NoteHeight => "note_height", Integer, Named(named::NOTE_HEIGHT);
        NoteX => "note_x", Integer, Named(named::NOTE_X);
        NoteY => "note_y", Integer, Named(named::NOTE_Y);
    }
}

column_set! {
    pub enum TaskColumn: Task {
        TaskStatus => "task_status", Integer, Named(named::TASK_STATUS);
        PercentComplete => "percent_complete", Double,
            Named(named::PERCENT_COMPLETE);
        IsTeamTask => "is_team_task", Boolean, Named(named::TEAM_TASK);
        StartDate => "start_date", TimestampSec,
            Named(named::TASK_START_DATE);
        DueDate => "due_date", TimestampSec, Named(named::TASK_DUE_DATE);
        DateCompleted => "date_completed", TimestampSec,
            Named(named::TASK_DATE_COMPLETED);
        ActualEffort => "actual_effort", Integer,
            Named(named::TASK_ACTUAL_EFFORT);
        EstimatedEffort => "estimated_effort", Integer,
            Named(named::TASK_ESTIMATED_EFFORT);
        IsComplete => "is_complete", Boolean, Named(named::TASK_COMPLETE);
        TaskOwner => "task_owner", Varchar, Named(named::TASK_OWNER);
        TaskAssigner => "task_assigner", Varchar,
            Named(named::TASK_ASSIGNER);
        LastUser => "last_user", Varchar, Named(named::TASK_LAST_USER);
        IsRecurring => "is_recurring", Boolean,
            Named(named::TASK_FRECURRING);
        Ownership => "ownership", Integer, Named(named::TASK_OWNERSHIP);
        LastUpdate => "last_update", TimestampSec,
            Named(named::TASK_LAST_UPDATE);
    }
}

column_set! {
    pub enum DistListColumn: DistList {
        ListName => "list_name", Varchar,
            Named(named::DISTRIBUTION_LIST_NAME);
        OneOffMembers => "one_off_members", List(&ONE_OFF),
            Named(named::DISTRIBUTION_LIST_ONE_OFF_MEMBERS);
        MemberNodeIds => "member_node_ids", List(&UInteger),
            Named(named::DISTRIBUTION_LIST_MEMBERS);
    }
}
