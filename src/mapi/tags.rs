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

//! Property ids of the fixed (non-named) MAPI properties the scanner reads.

use super::PropId;

// Common to folders, messages, and the store
pub const DISPLAY_NAME: PropId = 0x3001;
pub const COMMENT: PropId = 0x3004;
pub const CREATION_TIME: PropId = 0x3007;
pub const LAST_MODIFICATION_TIME: PropId = 0x3008;
pub const RECORD_KEY: PropId = 0x0FF9;

// Folders
pub const CONTENT_COUNT: PropId = 0x3602;
pub const CONTENT_UNREAD: PropId = 0x3603;
pub const CONTAINER_CLASS: PropId = 0x3613;

// Messages
pub const IMPORTANCE: PropId = 0x0017;
pub const MESSAGE_CLASS: PropId = 0x001A;
pub const PRIORITY: PropId = 0x0026;
pub const SENSITIVITY: PropId = 0x0036;
pub const SUBJECT: PropId = 0x0037;
pub const SENT_REPRESENTING_NAME: PropId = 0x0042;
pub const CONVERSATION_TOPIC: PropId = 0x0070;
pub const SENDER_NAME: PropId = 0x0C1A;
pub const SENDER_EMAIL_ADDRESS: PropId = 0x0C1F;
pub const MESSAGE_DELIVERY_TIME: PropId = 0x0E06;
pub const MESSAGE_FLAGS: PropId = 0x0E07;
pub const MESSAGE_SIZE: PropId = 0x0E08;
pub const BODY: PropId = 0x1000;
pub const BODY_HTML: PropId = 0x1013;
pub const INTERNET_MESSAGE_ID: PropId = 0x1035;

// Recipient rows
pub const RECIPIENT_TYPE: PropId = 0x0C15;
pub const ADDRESS_TYPE: PropId = 0x3002;
pub const EMAIL_ADDRESS: PropId = 0x3003;
pub const ACCOUNT: PropId = 0x3A00;

// Attachments
pub const ATTACH_DATA: PropId = 0x3701;
pub const ATTACH_EXTENSION: PropId = 0x3703;
pub const ATTACH_FILENAME: PropId = 0x3704;
pub const ATTACH_METHOD: PropId = 0x3705;
pub const ATTACH_LONG_FILENAME: PropId = 0x3707;
pub const ATTACH_MIME_TAG: PropId = 0x370E;
pub const ATTACH_CONTENT_ID: PropId = 0x3712;

// Contacts
pub const CALLBACK_TELEPHONE_NUMBER: PropId = 0x3A02;
pub const CONVERSION_PROHIBITED: PropId = 0x3A03;
pub const DISCLOSE_RECIPIENTS: PropId = 0x3A04;
pub const GENERATION: PropId = 0x3A05;
pub const GIVEN_NAME: PropId = 0x3A06;
pub const GOVERNMENT_ID_NUMBER: PropId = 0x3A07;
pub const BUSINESS_TELEPHONE_NUMBER: PropId = 0x3A08;
pub const HOME_TELEPHONE_NUMBER: PropId = 0x3A09;
pub const INITIALS: PropId = 0x3A0A;
pub const KEYWORD: PropId = 0x3A0B;
pub const LANGUAGE: PropId = 0x3A0C;
pub const LOCATION: PropId = 0x3A0D;
pub const MAIL_PERMISSION: PropId = 0x3A0E;
pub const MHS_COMMON_NAME: PropId = 0x3A0F;
pub const ORGANIZATIONAL_ID_NUMBER: PropId = 0x3A10;
pub const SURNAME: PropId = 0x3A11;
pub const ORIGINAL_DISPLAY_NAME: PropId = 0x3A13;
pub const POSTAL_ADDRESS: PropId = 0x3A15;
pub const COMPANY_NAME: PropId = 0x3A16;
pub const TITLE: PropId = 0x3A17;
pub const DEPARTMENT_NAME: PropId = 0x3A18;
pub const OFFICE_LOCATION: PropId = 0x3A19;
pub const PRIMARY_TELEPHONE_NUMBER: PropId = 0x3A1A;
pub const BUSINESS2_TELEPHONE_NUMBER: PropId = 0x3A1B;
pub const MOBILE_TELEPHONE_NUMBER: PropId = 0x3A1C;
pub const RADIO_TELEPHONE_NUMBER: PropId = 0x3A1D;
pub const CAR_TELEPHONE_NUMBER: PropId = 0x3A1E;
pub const OTHER_TELEPHONE_NUMBER: PropId = 0x3A1F;
pub const TRANSMITTABLE_DISPLAY_NAME: PropId = 0x3A20;
pub const PAGER_TELEPHONE_NUMBER: PropId = 0x3A21;
pub const PRIMARY_FAX_NUMBER: PropId = 0x3A23;
pub const BUSINESS_FAX_NUMBER: PropId = 0x3A24;
pub const HOME_FAX_NUMBER: PropId = 0x3A25;
pub const COUNTRY: PropId = 0x3A26;
pub const LOCALITY: PropId = 0x3A27;
pub const STATE_OR_PROVINCE: PropId = 0x3A28;
pub const STREET_ADDRESS: PropId = 0x3A29;
pub const POSTAL_CODE: PropId = 0x3A2A;
pub const POST_OFFICE_BOX: PropId = 0x3A2B;
pub const TELEX_NUMBER: PropId = 0x3A2C;
pub const ISDN_NUMBER: PropId = 0x3A2D;
pub const ASSISTANT_TELEPHONE_NUMBER: PropId = 0x3A2E;
pub const HOME2_TELEPHONE_NUMBER: PropId = 0x3A2F;
pub const ASSISTANT: PropId = 0x3A30;
pub const SEND_RICH_INFO: PropId = 0x3A40;
pub const WEDDING_ANNIVERSARY: PropId = 0x3A41;
pub const BIRTHDAY: PropId = 0x3A42;
pub const HOBBIES: PropId = 0x3A43;
pub const MIDDLE_NAME: PropId = 0x3A44;
pub const DISPLAY_NAME_PREFIX: PropId = 0x3A45;
pub const PROFESSION: PropId = 0x3A46;
pub const REFERRED_BY_NAME: PropId = 0x3A47;
pub const SPOUSE_NAME: PropId = 0x3A48;
pub const COMPUTER_NETWORK_NAME: PropId = 0x3A49;
pub const CUSTOMER_ID: PropId = 0x3A4A;
pub const TTYTDD_PHONE_NUMBER: PropId = 0x3A4B;
pub const FTP_SITE: PropId = 0x3A4C;
pub const GENDER: PropId = 0x3A4D;
pub const MANAGER_NAME: PropId = 0x3A4E;
pub const NICKNAME: PropId = 0x3A4F;
pub const PERSONAL_HOME_PAGE: PropId = 0x3A50;
pub const BUSINESS_HOME_PAGE: PropId = 0x3A51;
pub const COMPANY_MAIN_PHONE_NUMBER: PropId = 0x3A57;
pub const CHILDRENS_NAMES: PropId = 0x3A58;
pub const HOME_ADDRESS_CITY: PropId = 0x3A59;
pub const HOME_ADDRESS_COUNTRY: PropId = 0x3A5A;
pub const HOME_ADDRESS_POSTAL_CODE: PropId = 0x3A5B;
pub const HOME_ADDRESS_STATE_OR_PROVINCE: PropId = 0x3A5C;
pub const HOME_ADDRESS_STREET: PropId = 0x3A5D;
pub const HOME_ADDRESS_POST_OFFICE_BOX: PropId = 0x3A5E;
pub const OTHER_ADDRESS_CITY: PropId = 0x3A5F;
pub const OTHER_ADDRESS_COUNTRY: PropId = 0x3A60;
pub const OTHER_ADDRESS_POSTAL_CODE: PropId = 0x3A61;
pub const OTHER_ADDRESS_STATE_OR_PROVINCE: PropId = 0x3A62;
pub const OTHER_ADDRESS_STREET: PropId = 0x3A63;
pub const OTHER_ADDRESS_POST_OFFICE_BOX: PropId = 0x3A64;
